//! Design Intake - Conversational website design questionnaire
//!
//! Walks a visitor through a fixed sequence of questions about the site they
//! want, branches the palette and template suggestions on earlier answers,
//! and compiles the collected answers into a design brief for a downstream
//! generator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
