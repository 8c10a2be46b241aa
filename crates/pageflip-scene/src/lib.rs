#![cfg_attr(not(test), no_std)]

//! Scene-side collaborators for `pageflip-core`: the element deck with its
//! covers, the page-turn cue and the touch screen.

pub mod input;
pub mod platform;

#[cfg(test)]
mod tests;
