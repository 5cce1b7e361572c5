//! Vertex cover utilities built on the crown-core graph model

pub mod approx;
pub mod complement;
pub mod verify;


pub use approx::{approximate_cover, edge_pick_cover, max_degree_cover, ApproxStrategy, UnknownStrategy, APPROX_OUTPUT};
pub use complement::{clique_instance, complement, CliqueInstance, COMPLEMENT_OUTPUT};
pub use verify::{verify_cover, Rejection, Verdict};
