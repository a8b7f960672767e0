//! Step Graph Resolver
//!
//! Back/next navigation for the listing wizard. Three topologies exist:
//! the linear product flow, the voucher flows (plain and hotel) and the
//! media flows that branch by subcategory.

pub mod resolver;
pub mod step_name;
pub mod topology;

pub use resolver::{
    get_prev_next_step_paths, media_product_info_slug, resolve_step_paths, topology_for,
};
pub use step_name::StepName;
pub use topology::{PrevNext, StepNode, StepTopology, TopologyError};
