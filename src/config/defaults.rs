//! Default values shared by the engine configs and serde deserialization.

pub fn tolerance() -> f32 {
    0.01
}

pub fn broad_phase_margin() -> f32 {
    10.0
}

pub fn min_dimension() -> f32 {
    0.1
}

pub fn resolution() -> f32 {
    0.4
}

pub fn clearance() -> f32 {
    0.1
}

pub fn max_iterations() -> usize {
    20_000
}

pub fn search_padding() -> f32 {
    2.0
}
