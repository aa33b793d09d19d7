// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property test modules

mod greeting_laws;
mod publisher_laws;
