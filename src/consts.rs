// Shared constants for the board geometry
pub(crate) const N_CELLS: usize = 81;
