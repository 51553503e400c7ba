#![deny(clippy::all)]

//! Vue single-file-component script extraction.
//!
//! A `.vue` file is not valid JavaScript; before any AST work can happen the
//! embedded `<script>` block(s) have to be carved out of the surrounding
//! markup. This crate does that with plain byte searching (memchr, no regex)
//! and returns borrowed slices into the original source, so splitting a
//! component allocates nothing.
//!
//! Vue SFCs can carry up to two script blocks: a regular `<script>` (Options
//! API) and a `<script setup>` (Composition API). [`combine_scripts`] merges
//! them in Vue's execution order (setup first) into one parseable unit.

mod common;
mod vue;

pub use common::{
    ExtractedScript, ExtractorError, ScriptContext, ScriptExtractor, MAX_FILE_SIZE,
    MAX_SCRIPT_TAGS,
};
pub use vue::{combine_scripts, VueExtractor};
