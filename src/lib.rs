//! Insight Quiz - terminal personality quiz.
//!
//! A respondent picks a survey, shares optional demographics, answers a
//! fixed sequence of multiple-choice questions and receives an AI-generated
//! personality insight.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
