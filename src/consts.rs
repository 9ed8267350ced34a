pub(crate) const N_CELLS: usize = 81;
