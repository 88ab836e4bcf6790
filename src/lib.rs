//! Maximum flow algorithms over directed capacitated networks, such as road networks where each
//! street segment becomes a pair of opposing arcs.
//!
//! Three solvers share the [`MaxFlow`] contract:
//! - [`Dinitz`]: layered blocking flows,
//! - [`EdmondsKarp`]: shortest augmenting paths,
//! - [`FordFulkerson`]: depth-first augmenting paths.
//!
//! ```
//! use roadflow::{Dinitz, FlowNetwork, MaxFlow};
//!
//! let network = FlowNetwork::from_arcs([("s", "a", 3), ("a", "t", 2), ("s", "t", 1)]).unwrap();
//! let mut dinitz = Dinitz::new(network, "s", "t").unwrap();
//!
//! assert_eq!(dinitz.compute_max_flow(), Ok(3));
//! assert_eq!(dinitz.network().flow(&"a", &"t"), 2);
//! ```
#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod amount;
pub mod arc;
pub mod capacity;
pub mod error;
pub mod id;
pub mod network;
pub mod road;

pub use crate::algo::{max_flow, Algorithm, Dinitz, EdmondsKarp, FordFulkerson, MaxFlow, Stats};
pub use crate::amount::Amount;
pub use crate::arc::{ArcId, FlowArc, FlowRecord, RawArc};
pub use crate::capacity::{CapacityAssigner, ConstantCapacity, RandomCapacity};
pub use crate::error::Error;
pub use crate::id::Id;
pub use crate::network::{FlowNetwork, MinCut, NodePair};
pub use crate::road::{build_road_network, RoadSegment};
