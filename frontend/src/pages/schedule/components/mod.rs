pub mod toolbar;
pub mod week_grid;
