//! Color font onboarding CLI library.

pub mod cli;
