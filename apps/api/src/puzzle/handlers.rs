//! Axum route handlers for the Puzzle API.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Config, MIN_GRID_SIZE};
use crate::errors::AppError;
use crate::puzzle::numbering::{number_placements, WordNumber};
use crate::puzzle::{generate, Orientation, PlacementResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub words: Vec<String>,
    /// Grid size; the configured default when absent.
    pub size: Option<usize>,
    /// Replays an earlier layout when set.
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub puzzle_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub size: usize,
    pub grid: Vec<Vec<char>>,
    pub black_boxes: Vec<Vec<bool>>,
    pub placed_words: Vec<String>,
    pub word_positions: BTreeMap<String, (usize, usize, Orientation)>,
    pub word_numbers: Vec<WordNumber>,
    pub dropped_words: Vec<String>,
}

impl GenerateResponse {
    fn from_result(puzzle_id: Uuid, seed: u64, result: &PlacementResult) -> Self {
        GenerateResponse {
            puzzle_id,
            generated_at: Utc::now(),
            seed,
            size: result.grid.size(),
            grid: result.grid.rows(),
            black_boxes: result.grid.boundary_rows(),
            placed_words: result.placed_words(),
            word_positions: result.word_positions().into_iter().collect(),
            word_numbers: number_placements(&result.placements),
            dropped_words: result.dropped_words(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate
///
/// Lays out the submitted words on a square grid. Words that cannot be placed
/// are listed in `dropped_words`; that is not an error.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let words = normalize_words(&request.words)?;
    if words.len() > state.config.max_words {
        return Err(AppError::Validation(format!(
            "at most {} words are accepted, got {}",
            state.config.max_words,
            words.len()
        )));
    }
    let size = resolve_size(request.size, &state.config)?;
    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let puzzle_id = Uuid::new_v4();

    info!(%puzzle_id, requested = words.len(), size, seed, "Generating crossword");

    // CPU-bound; keep it off the async executor.
    let result = tokio::task::spawn_blocking(move || {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&words, size, &mut rng)
    })
    .await
    .map_err(|e| {
        AppError::Internal(anyhow::anyhow!("spawn_blocking failed in generation: {e}"))
    })?;

    let response = GenerateResponse::from_result(puzzle_id, seed, &result);

    info!(
        %puzzle_id,
        placed = response.placed_words.len(),
        dropped = response.dropped_words.len(),
        "Crossword generated"
    );
    if !response.dropped_words.is_empty() {
        warn!(%puzzle_id, dropped = ?response.dropped_words, "Some words could not be placed");
    }
    for p in &result.placements {
        debug!(
            %puzzle_id,
            word = %p.word,
            row = p.row,
            col = p.col,
            orientation = %p.orientation,
            "Placed word"
        );
    }
    debug!(%puzzle_id, "Layout:\n{}", result.grid);

    Ok(Json(response))
}

/// Trims and upper-cases each word. Blank entries are rejected rather than
/// silently dropped so the caller can fix the input.
fn normalize_words(words: &[String]) -> Result<Vec<String>, AppError> {
    words
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let word = raw.trim();
            if word.is_empty() {
                Err(AppError::Validation(format!("words[{i}] cannot be empty")))
            } else {
                Ok(word.to_uppercase())
            }
        })
        .collect()
}

fn resolve_size(requested: Option<usize>, config: &Config) -> Result<usize, AppError> {
    let size = requested.unwrap_or(config.default_grid_size);
    if !(MIN_GRID_SIZE..=config.max_grid_size).contains(&size) {
        return Err(AppError::Validation(format!(
            "size must be between {MIN_GRID_SIZE} and {}, got {size}",
            config.max_grid_size
        )));
    }
    Ok(size)
}
