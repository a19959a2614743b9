//! Wordfall text-to-spatial mapping engine.
//!
//! Tokenizes free-form source text, locates exact occurrences of configured
//! search terms, and converts each occurrence's position in the token stream
//! into a cluster of colored cube placements stacked along a vertical axis.
//!
//! Zero I/O — pure mapping engine with no opinions about rendering or UI.

pub mod color;
pub mod constants;
pub mod locator;
pub mod placement;
pub mod session;
pub mod term;
pub mod tokenizer;
pub mod vec3;

pub use color::{Color, ColorParseError};
pub use constants::{
    CLUSTER_SIZE, EPSILON, HEIGHT_SCALE, HEIGHT_SHIFT, HEIGHT_SPAN, SPREAD, TERM_SLOTS,
};
pub use locator::{TermMatch, height_for_index, locate};
pub use placement::{Placement, cluster, place_term};
pub use session::{Phase, Session, SessionError, TermBatch};
pub use term::{TermSet, TermSlot};
pub use tokenizer::tokenize;
pub use vec3::Vec3;
