// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Static 802.11 rate table.
//!
//! Maps PHY transmission parameters (preamble, MCS, spatial streams, channel bandwidth and guard
//! interval) to a bitrate in kbps and the rate code written into hardware transmit descriptors.
//! All lookups are pure reads of `table::RATE_TABLE`.

#![deny(warnings)]

pub mod error;
pub mod lookup;
pub mod phy;
pub mod rate_code;
pub mod table;

pub use crate::{
    error::RateTableError,
    lookup::{
        all_supported_rates, band_end_index, band_range, band_start_index, legacy_rate_kbps,
        modulation_for, rate_kbps_for, rate_kbps_for_code, supported_rates, RateLookup,
        RT_INVALID_INDEX,
    },
    phy::{ChannelBandwidth, GuardInterval, Modulation, PhyModes, Preamble, WlanMode},
    rate_code::RateCode,
    table::{RateEntry, RATE_TABLE, RATE_TABLE_SIZE},
};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialize_lookup() {
        let lookup =
            rate_kbps_for(GuardInterval::Normal, 0, 0, Preamble::Vht, ChannelBandwidth::Cbw20);
        let json = serde_json::to_value(&lookup).expect("failed to serialize lookup");
        assert_eq!(
            json,
            serde_json::json!({ "rate_kbps": 6500, "row_index": 76, "rate_code": 768 })
        );
    }

    #[test]
    fn serialize_entry() {
        let json = serde_json::to_value(&RATE_TABLE[0]).expect("failed to serialize entry");
        assert_eq!(json["modulation"], "Cck");
        assert_eq!(json["valid_modes"]["bits"], PhyModes::CCK.bits());
        assert_eq!(json["rate_code"], 0x100);
    }
}
