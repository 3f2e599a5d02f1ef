// Domain layer: models, state and ports. No I/O.

pub mod ban_list;
pub mod model;
pub mod ports;
pub mod state;
