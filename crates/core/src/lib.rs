//! Color font onboarding: fetch sources, maximize their color tables with
//! `maximum_color`, and publish the results into a fonts repository.

pub mod coloring;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod sources;

pub use coloring::color_tables;
pub use error::OnboardError;
pub use pipeline::{Conversion, PipelineContext, Published, onboard};
pub use sources::{FONT_SOURCES, FontFile, FontSource, SourceKind};
