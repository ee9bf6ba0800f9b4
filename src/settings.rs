use serde::{Deserialize, Serialize};

/// Fixed per-session configuration: grid size and on-screen cell size.
/// Loaded once at startup; the core never re-reads it mid-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: usize,
    pub cell_size: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 8,
            cell_size: 64,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < 2 {
            // A 1x1 board fits no domino at all.
            return Err("Board size must be at least 2".to_string());
        }
        if self.board_size > 32 {
            return Err("Board size must not exceed 32".to_string());
        }
        if self.cell_size == 0 {
            return Err("Cell size must be positive".to_string());
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let settings: GameSettings = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to parse settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }

    pub fn board_pixel_size(&self) -> u32 {
        self.board_size as u32 * self.cell_size
    }

    /// Map a canvas pixel to its (row, col) cell, or `None` when the pixel
    /// falls outside the grid. Everything the pointing device produces goes
    /// through this before it may reach the game state. Degenerate settings
    /// that skipped `validate` map every pixel to no cell.
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        if self.cell_size == 0 {
            return None;
        }
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        if row < self.board_size && col < self.board_size {
            Some((row, col))
        } else {
            None
        }
    }
}
