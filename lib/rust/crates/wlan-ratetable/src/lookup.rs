// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        phy::{ChannelBandwidth, GuardInterval, Modulation, Preamble, WlanMode},
        rate_code::RateCode,
        table::*,
    },
    log::{debug, trace},
    std::ops::RangeInclusive,
};

/// Row index reported by a lookup that did not resolve to a row.
pub const RT_INVALID_INDEX: u32 = u32::MAX;

/// Result of resolving a PHY rate against the rate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RateLookup {
    /// 0 if the lookup failed or the row has no figure for the requested guard interval.
    pub rate_kbps: u32,
    /// `RT_INVALID_INDEX` if the lookup failed.
    pub row_index: u32,
    /// 0 if the lookup failed.
    pub rate_code: RateCode,
}

impl RateLookup {
    pub const INVALID: RateLookup =
        RateLookup { rate_kbps: 0, row_index: RT_INVALID_INDEX, rate_code: RateCode(0) };

    pub fn is_valid(&self) -> bool {
        self.row_index != RT_INVALID_INDEX
    }
}

/// Maps a preamble and bandwidth to the modulation class whose band holds the rate.
///
/// `bandwidth` must be one of 20, 40, 80 or 160 MHz. HT has no band above 40 MHz, so any width
/// other than 20 MHz selects HT40. CCK and OFDM ignore the bandwidth.
pub fn modulation_for(preamble: Preamble, bandwidth: ChannelBandwidth) -> Modulation {
    const VHT_BW_MOD: [Modulation; 4] =
        [Modulation::Vht20, Modulation::Vht40, Modulation::Vht80, Modulation::Vht160];
    const HE_BW_MOD: [Modulation; 4] =
        [Modulation::He20, Modulation::He40, Modulation::He80, Modulation::He160];

    debug_assert!(
        bandwidth != ChannelBandwidth::Cbw80P80,
        "modulation_for takes a 20/40/80/160 MHz bandwidth, got {:?}",
        bandwidth
    );
    // Release builds fold 80+80 into the 160 MHz band.
    let width = usize::from(bandwidth.into_primitive()).min(VHT_BW_MOD.len() - 1);

    match preamble {
        Preamble::Ht => match bandwidth {
            ChannelBandwidth::Cbw20 => Modulation::Ht20,
            _ => Modulation::Ht40,
        },
        Preamble::Cck => Modulation::Cck,
        Preamble::Vht => VHT_BW_MOD[width],
        Preamble::He => HE_BW_MOD[width],
        Preamble::Ofdm => Modulation::Ofdm,
    }
}

/// Resolves a PHY rate to its bitrate, table row and hardware rate code.
///
/// `nss` is zero-based here: 0 selects the single spatial stream block. For CCK the short
/// preamble bit of `mcs` is ignored. A lookup that lands outside the table yields
/// `RateLookup::INVALID`; this is not an error, callers on the transmit path check
/// `is_valid()` or simply use the zero rate.
pub fn rate_kbps_for(
    gi: GuardInterval,
    mcs: u16,
    nss: u8,
    preamble: Preamble,
    bandwidth: ChannelBandwidth,
) -> RateLookup {
    let modulation = modulation_for(preamble, bandwidth);
    let base = modulation.table_index();
    let mcs = usize::from(mcs);
    let nss = usize::from(nss);

    // The preamble set is closed, so every preamble has an offset formula; there is no
    // "unknown preamble returns the band base" case.
    let row = match preamble {
        Preamble::He => base + mcs + nss * NUM_HE_MCS,
        Preamble::Vht => base + mcs + nss * NUM_VHT_MCS,
        Preamble::Ht => base + mcs + nss * NUM_HT_MCS,
        Preamble::Cck => base + (mcs & !usize::from(CCK_SHORT_PREAMBLE_BIT)),
        Preamble::Ofdm => base + mcs,
    };

    let entry = match RATE_TABLE.get(row) {
        Some(entry) => entry,
        None => {
            debug!(
                "no rate for {:?} {:?} mcs {} nss {}: row {} is past the end of the table",
                preamble, bandwidth, mcs, nss, row
            );
            return RateLookup::INVALID;
        }
    };

    let rate_kbps = match gi {
        GuardInterval::Normal => entry.user_rate_kbps,
        other => entry.kbps_for_gi(other),
    };
    RateLookup { rate_kbps, row_index: row as u32, rate_code: entry.rate_code }
}

/// Looks up a row directly. Returns 0 for rows outside the table.
pub fn legacy_rate_kbps(row_index: usize, short_gi: bool) -> u32 {
    match RATE_TABLE.get(row_index) {
        Some(entry) if short_gi => entry.rate_kbps_sgi,
        Some(entry) => entry.rate_kbps,
        None => 0,
    }
}

/// Resolves a hardware rate code at the given bandwidth. Codes with a reserved preamble yield
/// `RateLookup::INVALID`.
pub fn rate_kbps_for_code(
    rate_code: RateCode,
    bandwidth: ChannelBandwidth,
    gi: GuardInterval,
) -> RateLookup {
    let preamble = match rate_code.preamble() {
        Ok(preamble) => preamble,
        Err(e) => {
            debug!("cannot resolve {}: {}", rate_code, e);
            return RateLookup::INVALID;
        }
    };
    rate_kbps_for(gi, u16::from(rate_code.mcs()), rate_code.nss() - 1, preamble, bandwidth)
}

/// Rows holding the MCS block for `nss` spatial streams of the given preamble and bandwidth.
///
/// `nss` is one-based and clamped to what the band holds: 4 for HT, 8 for VHT and HE, and 4 for
/// VHT and HE at 160 or 80+80 MHz. Returns `None` for combinations without a band, e.g. HT at
/// 80 MHz, and for the legacy preambles.
pub fn band_range(
    bandwidth: ChannelBandwidth,
    preamble: Preamble,
    nss: u8,
) -> Option<RangeInclusive<usize>> {
    use ChannelBandwidth::*;

    let modulation = match (preamble, bandwidth) {
        (Preamble::Ht, Cbw20) => Modulation::Ht20,
        (Preamble::Ht, Cbw40) => Modulation::Ht40,
        (Preamble::Vht, Cbw20) => Modulation::Vht20,
        (Preamble::Vht, Cbw40) => Modulation::Vht40,
        (Preamble::Vht, Cbw80) => Modulation::Vht80,
        (Preamble::Vht, Cbw160) | (Preamble::Vht, Cbw80P80) => Modulation::Vht160,
        (Preamble::He, Cbw20) => Modulation::He20,
        (Preamble::He, Cbw40) => Modulation::He40,
        (Preamble::He, Cbw80) => Modulation::He80,
        (Preamble::He, Cbw160) | (Preamble::He, Cbw80P80) => Modulation::He160,
        _ => {
            trace!("no rate band for {:?} at {:?}", preamble, bandwidth);
            return None;
        }
    };

    let nss = usize::from(nss).max(1).min(modulation.max_nss());
    let mcs_count = modulation.mcs_per_nss();
    let start = modulation.table_index() + (nss - 1) * mcs_count;
    Some(start..=start + mcs_count - 1)
}

/// First row of `band_range`, or `None` if there is no band.
pub fn band_start_index(
    bandwidth: ChannelBandwidth,
    preamble: Preamble,
    nss: u8,
) -> Option<usize> {
    band_range(bandwidth, preamble, nss).map(|range| *range.start())
}

/// Last row of `band_range`, or `None` if there is no band.
pub fn band_end_index(
    bandwidth: ChannelBandwidth,
    preamble: Preamble,
    nss: u8,
) -> Option<usize> {
    band_range(bandwidth, preamble, nss).map(|range| *range.end())
}

fn legacy_range(mode: WlanMode) -> Option<RangeInclusive<usize>> {
    match mode {
        WlanMode::B => Some(CCK_INDEX..=CCK_END_INDEX),
        WlanMode::A => Some(OFDM_INDEX..=OFDM_END_INDEX),
        WlanMode::G => Some(CCK_INDEX..=OFDM_END_INDEX),
        _ => None,
    }
}

fn mode_preamble(mode: WlanMode) -> Option<Preamble> {
    match mode {
        WlanMode::Na | WlanMode::Ng => Some(Preamble::Ht),
        WlanMode::Ac => Some(Preamble::Vht),
        WlanMode::Axa | WlanMode::Axg => Some(Preamble::He),
        WlanMode::A | WlanMode::B | WlanMode::G => None,
    }
}

fn collect_rates(gi: GuardInterval, range: Option<RangeInclusive<usize>>) -> Vec<u32> {
    let range = match range {
        Some(range) if *range.start() < RATE_TABLE_SIZE && *range.end() < RATE_TABLE_SIZE => {
            range
        }
        Some(range) => {
            debug!("rate range {:?} is out of bounds", range);
            return vec![];
        }
        None => return vec![],
    };
    RATE_TABLE[range]
        .iter()
        .filter(|entry| entry.is_valid())
        .map(|entry| entry.kbps_for_gi(gi))
        .collect()
}

/// Rates usable in `mode` for `nss` spatial streams at `bandwidth`, in table order.
///
/// Legacy modes (a/b/g) ignore `nss` and `bandwidth`. Rows that are never valid are skipped.
/// An unresolvable band yields an empty list.
pub fn supported_rates(
    mode: WlanMode,
    gi: GuardInterval,
    nss: u8,
    bandwidth: ChannelBandwidth,
) -> Vec<u32> {
    let range = match mode_preamble(mode) {
        Some(preamble) => band_range(bandwidth, preamble, nss),
        None => legacy_range(mode),
    };
    collect_rates(gi, range)
}

/// Every rate usable in `mode` across all bandwidths and spatial stream counts, in table order.
pub fn all_supported_rates(mode: WlanMode, gi: GuardInterval) -> Vec<u32> {
    let range = match mode_preamble(mode) {
        Some(preamble) => {
            let (widest, max_nss) = match preamble {
                Preamble::Ht => (ChannelBandwidth::Cbw40, MAX_HT_NSS),
                _ => (ChannelBandwidth::Cbw160, MAX_NSS_AT_160MHZ),
            };
            let start = band_start_index(ChannelBandwidth::Cbw20, preamble, 1);
            let end = band_end_index(widest, preamble, max_nss as u8);
            match (start, end) {
                (Some(start), Some(end)) => Some(start..=end),
                _ => None,
            }
        }
        None => legacy_range(mode),
    };
    collect_rates(gi, range)
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(Preamble::Cck, ChannelBandwidth::Cbw80, Modulation::Cck)]
    #[test_case(Preamble::Ofdm, ChannelBandwidth::Cbw40, Modulation::Ofdm)]
    #[test_case(Preamble::Ht, ChannelBandwidth::Cbw20, Modulation::Ht20)]
    #[test_case(Preamble::Ht, ChannelBandwidth::Cbw40, Modulation::Ht40)]
    #[test_case(Preamble::Ht, ChannelBandwidth::Cbw160, Modulation::Ht40; "ht collapses to 40")]
    #[test_case(Preamble::Vht, ChannelBandwidth::Cbw20, Modulation::Vht20)]
    #[test_case(Preamble::Vht, ChannelBandwidth::Cbw80, Modulation::Vht80)]
    #[test_case(Preamble::Vht, ChannelBandwidth::Cbw160, Modulation::Vht160)]
    #[test_case(Preamble::He, ChannelBandwidth::Cbw40, Modulation::He40)]
    #[test_case(Preamble::He, ChannelBandwidth::Cbw160, Modulation::He160)]
    fn modulation_for_preamble(
        preamble: Preamble,
        bandwidth: ChannelBandwidth,
        expected: Modulation,
    ) {
        assert_eq!(modulation_for(preamble, bandwidth), expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "modulation_for takes a 20/40/80/160 MHz bandwidth")]
    fn modulation_for_rejects_80p80() {
        modulation_for(Preamble::He, ChannelBandwidth::Cbw80P80);
    }

    #[test]
    fn vht20_single_stream_mcs0() {
        let lookup =
            rate_kbps_for(GuardInterval::Normal, 0, 0, Preamble::Vht, ChannelBandwidth::Cbw20);
        assert_eq!(
            lookup,
            RateLookup {
                rate_kbps: 6500,
                row_index: VHT20_INDEX as u32,
                rate_code: RateCode(0x300),
            }
        );
        assert!(lookup.is_valid());
    }

    #[test_case(GuardInterval::Normal, 72100)]
    #[test_case(GuardInterval::Short, 74200)]
    #[test_case(GuardInterval::Double, 68100)]
    #[test_case(GuardInterval::Quadruple, 61300)]
    fn he160_guard_intervals(gi: GuardInterval, kbps: u32) {
        let lookup = rate_kbps_for(gi, 0, 0, Preamble::He, ChannelBandwidth::Cbw160);
        assert_eq!(lookup.rate_kbps, kbps);
        assert_eq!(lookup.row_index, HE160_INDEX as u32);
        assert_eq!(*lookup.rate_code, 0x400);
    }

    #[test]
    fn ht_guard_intervals_without_figures_are_zero() {
        let lookup =
            rate_kbps_for(GuardInterval::Double, 7, 1, Preamble::Ht, ChannelBandwidth::Cbw20);
        assert_eq!(lookup.rate_kbps, 0);
        assert_eq!(lookup.row_index, (HT20_INDEX + NUM_HT_MCS + 7) as u32);
        assert_eq!(*lookup.rate_code, 0x227);
    }

    #[test]
    fn lookup_past_end_of_table() {
        let lookup =
            rate_kbps_for(GuardInterval::Normal, 99, 7, Preamble::He, ChannelBandwidth::Cbw160);
        assert_eq!(lookup, RateLookup::INVALID);
        assert_eq!(lookup.rate_kbps, 0);
        assert_eq!(*lookup.rate_code, 0);
        assert!(!lookup.is_valid());
    }

    #[test]
    fn cck_short_preamble_bit_is_ignored() {
        let long =
            rate_kbps_for(GuardInterval::Normal, 1, 0, Preamble::Cck, ChannelBandwidth::Cbw20);
        let short = rate_kbps_for(
            GuardInterval::Normal,
            1 | CCK_SHORT_PREAMBLE_BIT,
            0,
            Preamble::Cck,
            ChannelBandwidth::Cbw20,
        );
        assert_eq!(long, short);
        assert_eq!(long.rate_kbps, 5500);
        assert_eq!(*long.rate_code, 0x101);
    }

    #[test]
    fn ofdm_ignores_nss() {
        let lookup =
            rate_kbps_for(GuardInterval::Normal, 4, 3, Preamble::Ofdm, ChannelBandwidth::Cbw20);
        assert_eq!(lookup.rate_kbps, 54000);
        assert_eq!(lookup.row_index, (OFDM_INDEX + 4) as u32);
    }

    #[test]
    fn lookups_are_repeatable() {
        for mcs in 0..NUM_HE_MCS as u16 {
            let first =
                rate_kbps_for(GuardInterval::Short, mcs, 2, Preamble::He, ChannelBandwidth::Cbw80);
            let second =
                rate_kbps_for(GuardInterval::Short, mcs, 2, Preamble::He, ChannelBandwidth::Cbw80);
            assert_eq!(first, second);
        }
        assert_eq!(
            supported_rates(WlanMode::Ac, GuardInterval::Normal, 2, ChannelBandwidth::Cbw40),
            supported_rates(WlanMode::Ac, GuardInterval::Normal, 2, ChannelBandwidth::Cbw40),
        );
    }

    #[test]
    fn every_valid_row_round_trips() {
        for (row, entry) in RATE_TABLE.iter().enumerate().filter(|(_, entry)| entry.is_valid()) {
            let modulation = entry.modulation;
            let offset = row - modulation.table_index();
            let nss = offset / modulation.mcs_per_nss();
            let mcs = offset % modulation.mcs_per_nss();
            let lookup = rate_kbps_for(
                GuardInterval::Normal,
                mcs as u16,
                nss as u8,
                modulation.preamble(),
                modulation.bandwidth(),
            );
            assert_eq!(lookup.row_index, row as u32, "row {}", row);
            assert_eq!(lookup.rate_kbps, entry.rate_kbps, "row {}", row);
            assert_eq!(lookup.rate_code, entry.rate_code, "row {}", row);
        }
    }

    #[test]
    fn legacy_rate_lookup() {
        assert_eq!(legacy_rate_kbps(0, false), 11000);
        assert_eq!(legacy_rate_kbps(0, true), 11000);
        assert_eq!(legacy_rate_kbps(HT20_INDEX, false), 6500);
        assert_eq!(legacy_rate_kbps(HT20_INDEX, true), 7200);
        assert_eq!(legacy_rate_kbps(RATE_TABLE_SIZE - 1, false), 5764700);
        assert_eq!(legacy_rate_kbps(RATE_TABLE_SIZE, false), 0);
        assert_eq!(legacy_rate_kbps(usize::MAX, true), 0);
    }

    #[test]
    fn rate_code_lookup() {
        let lookup = rate_kbps_for_code(
            RateCode::from(0x346),
            ChannelBandwidth::Cbw80,
            GuardInterval::Short,
        );
        assert_eq!(lookup.row_index, (VHT80_INDEX + 2 * NUM_VHT_MCS + 6) as u32);
        assert_eq!(lookup.rate_kbps, 877500);

        let lookup = rate_kbps_for_code(
            RateCode::from(0x220),
            ChannelBandwidth::Cbw40,
            GuardInterval::Normal,
        );
        assert_eq!(lookup.row_index, (HT40_INDEX + NUM_HT_MCS) as u32);
        assert_eq!(lookup.rate_code, RateCode(0x220));
    }

    #[test]
    fn every_row_resolves_from_its_rate_code() {
        for (row, entry) in RATE_TABLE.iter().enumerate() {
            let lookup = rate_kbps_for_code(
                entry.rate_code,
                entry.modulation.bandwidth(),
                GuardInterval::Normal,
            );
            assert_eq!(lookup.row_index, row as u32, "row {}", row);
        }
    }

    #[test]
    fn rate_code_with_reserved_preamble() {
        let lookup = rate_kbps_for_code(
            RateCode::from(0x700),
            ChannelBandwidth::Cbw20,
            GuardInterval::Normal,
        );
        assert_eq!(lookup, RateLookup::INVALID);
    }

    #[test_case(ChannelBandwidth::Cbw20, Preamble::Ht, 1, Some(12..=19))]
    #[test_case(ChannelBandwidth::Cbw40, Preamble::Ht, 4, Some(68..=75))]
    #[test_case(ChannelBandwidth::Cbw40, Preamble::Ht, 8, Some(68..=75); "ht nss clamped to 4")]
    #[test_case(ChannelBandwidth::Cbw80, Preamble::Ht, 1, None; "no ht at 80")]
    #[test_case(ChannelBandwidth::Cbw20, Preamble::Vht, 1, Some(76..=87))]
    #[test_case(ChannelBandwidth::Cbw80, Preamble::Vht, 8, Some(352..=363))]
    #[test_case(ChannelBandwidth::Cbw160, Preamble::Vht, 8, Some(400..=411); "vht160 clamped to 4")]
    #[test_case(ChannelBandwidth::Cbw80P80, Preamble::Vht, 1, Some(364..=375); "vht 80+80")]
    #[test_case(ChannelBandwidth::Cbw20, Preamble::He, 2, Some(426..=439))]
    #[test_case(ChannelBandwidth::Cbw80P80, Preamble::He, 4, Some(790..=803); "he 80+80")]
    #[test_case(ChannelBandwidth::Cbw20, Preamble::He, 0, Some(412..=425); "nss 0 treated as 1")]
    #[test_case(ChannelBandwidth::Cbw20, Preamble::Cck, 1, None; "no cck band range")]
    #[test_case(ChannelBandwidth::Cbw20, Preamble::Ofdm, 1, None; "no ofdm band range")]
    fn resolve_band_range(
        bandwidth: ChannelBandwidth,
        preamble: Preamble,
        nss: u8,
        expected: Option<RangeInclusive<usize>>,
    ) {
        assert_eq!(band_range(bandwidth, preamble, nss), expected);
        assert_eq!(
            band_start_index(bandwidth, preamble, nss),
            expected.as_ref().map(|range| *range.start())
        );
        assert_eq!(
            band_end_index(bandwidth, preamble, nss),
            expected.as_ref().map(|range| *range.end())
        );
    }

    #[test]
    fn band_ranges_cover_one_mcs_block() {
        let bandwidths = [
            ChannelBandwidth::Cbw20,
            ChannelBandwidth::Cbw40,
            ChannelBandwidth::Cbw80,
            ChannelBandwidth::Cbw160,
            ChannelBandwidth::Cbw80P80,
        ];
        for preamble in [Preamble::Ht, Preamble::Vht, Preamble::He].iter() {
            for bandwidth in bandwidths.iter() {
                for nss in 1..=MAX_NSS as u8 {
                    let range = match band_range(*bandwidth, *preamble, nss) {
                        Some(range) => range,
                        None => continue,
                    };
                    let modulation = RATE_TABLE[*range.start()].modulation;
                    assert!(range.start() <= range.end());
                    assert_eq!(range.clone().count(), modulation.mcs_per_nss());
                    assert!(RATE_TABLE[range].iter().all(|entry| entry.modulation == modulation));
                }
            }
        }
    }

    #[test]
    fn vht20_single_stream_rates() {
        let rates =
            supported_rates(WlanMode::Ac, GuardInterval::Normal, 1, ChannelBandwidth::Cbw20);
        assert_eq!(
            rates,
            vec![6500, 13000, 19500, 26000, 39000, 52000, 58500, 65000, 78000, 86500, 97500, 108300]
        );
    }

    #[test]
    fn supported_rates_skip_invalid_rows() {
        let rates =
            supported_rates(WlanMode::Ac, GuardInterval::Normal, 3, ChannelBandwidth::Cbw80);
        assert_eq!(rates.len(), NUM_VHT_MCS - 1);
        assert!(!rates.contains(&789800));
    }

    #[test]
    fn supported_rates_select_guard_interval() {
        let rates =
            supported_rates(WlanMode::Axa, GuardInterval::Quadruple, 1, ChannelBandwidth::Cbw20);
        assert_eq!(rates.len(), NUM_HE_MCS);
        assert_eq!(rates[0], 7300);
        let rates = supported_rates(WlanMode::Ng, GuardInterval::Short, 1, ChannelBandwidth::Cbw20);
        assert_eq!(rates, vec![7200, 14400, 21700, 28900, 43300, 57800, 65000, 72200]);
    }

    #[test_case(WlanMode::B, vec![11000, 5500, 2000, 1000])]
    #[test_case(WlanMode::A, vec![48000, 24000, 12000, 6000, 54000, 36000, 18000, 9000])]
    #[test_case(
        WlanMode::G,
        vec![11000, 5500, 2000, 1000, 48000, 24000, 12000, 6000, 54000, 36000, 18000, 9000]
    )]
    fn legacy_supported_rates(mode: WlanMode, expected: Vec<u32>) {
        // Legacy modes ignore NSS and bandwidth.
        assert_eq!(
            supported_rates(mode, GuardInterval::Normal, 4, ChannelBandwidth::Cbw160),
            expected
        );
        assert_eq!(all_supported_rates(mode, GuardInterval::Normal), expected);
    }

    #[test]
    fn supported_rates_without_band() {
        assert!(supported_rates(WlanMode::Na, GuardInterval::Normal, 1, ChannelBandwidth::Cbw80)
            .is_empty());
    }

    #[test_case(WlanMode::Na, HT20_INDEX, VHT20_INDEX; "ht")]
    #[test_case(WlanMode::Ng, HT20_INDEX, VHT20_INDEX; "ht 2.4 GHz")]
    #[test_case(WlanMode::Ac, VHT20_INDEX, HE20_INDEX; "vht")]
    #[test_case(WlanMode::Axg, HE20_INDEX, RATE_TABLE_SIZE; "he")]
    fn all_supported_rates_span_every_band(mode: WlanMode, start: usize, end: usize) {
        let expected: Vec<u32> = RATE_TABLE[start..end]
            .iter()
            .filter(|entry| entry.is_valid())
            .map(|entry| entry.rate_kbps)
            .collect();
        assert_eq!(all_supported_rates(mode, GuardInterval::Normal), expected);
    }
}
