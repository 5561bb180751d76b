// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

/// Errors raised while converting raw hardware/firmware values into rate table vocabulary.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RateTableError {
    #[error("invalid preamble type {0}")]
    InvalidPreamble(u8),
    #[error("invalid channel bandwidth {0}")]
    InvalidBandwidth(u8),
    #[error("invalid guard interval {0}")]
    InvalidGuardInterval(u8),
    #[error("invalid operating mode {0}")]
    InvalidMode(u8),
    #[error("invalid number of spatial streams {0}")]
    InvalidNss(u8),
    #[error("invalid MCS index {0}")]
    InvalidMcs(u8),
}
