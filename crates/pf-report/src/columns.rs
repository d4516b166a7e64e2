//! Column layout of the tech-regime report.
//!
//! The upstream export addresses fields purely by position: a fixed block of
//! header rows followed by data rows whose columns carry fixed meanings, with
//! unused columns in between. No header-name validation is possible, so any
//! reordering at the source breaks parsing silently. Every offset the parser
//! touches is declared here and nowhere else.

/// Non-data rows at the top of the report.
pub const HEADER_ROWS: usize = 10;

pub const FIELD: usize = 2;
pub const WELL_NAME: usize = 4;
pub const D_CAS: usize = 9;
pub const D_TUB: usize = 10;
pub const D_CH: usize = 11;
pub const H_PERF: usize = 12;
pub const EXT_H_PERF: usize = 13;
pub const AL_TYPE: usize = 14;
pub const ESP_TYPE: usize = 15;
pub const RATE_NOM: usize = 16;
pub const HEAD_NOM: usize = 17;
pub const FREQ: usize = 18;
pub const K_SEP: usize = 19;
pub const H_TUB: usize = 20;
pub const P_WH: usize = 21;
pub const P_FL: usize = 22;
pub const P_RES: usize = 24;
pub const P_IN: usize = 27;
pub const P_WF: usize = 28;
pub const Q_LIQ: usize = 30;
pub const WCT: usize = 31;
pub const RP: usize = 33;
pub const PB: usize = 35;
pub const RSB: usize = 36;
pub const T_RES: usize = 37;
pub const MUOB: usize = 42;
pub const BOB: usize = 45;
pub const GAMMA_OIL: usize = 46;
pub const GAMMA_WAT: usize = 47;
pub const PI: usize = 51;
pub const WORK_TYPE: usize = 120;
pub const EXT_H_TUB: usize = 161;
pub const REGIME: usize = 173;

/// Every mapped offset, used for width checks and blank-row detection.
pub const ALL: [usize; 33] = [
    FIELD, WELL_NAME, D_CAS, D_TUB, D_CH, H_PERF, EXT_H_PERF, AL_TYPE, ESP_TYPE, RATE_NOM,
    HEAD_NOM, FREQ, K_SEP, H_TUB, P_WH, P_FL, P_RES, P_IN, P_WF, Q_LIQ, WCT, RP, PB, RSB, T_RES,
    MUOB, BOB, GAMMA_OIL, GAMMA_WAT, PI, WORK_TYPE, EXT_H_TUB, REGIME,
];

pub const MAX_OFFSET: usize = max_of(&ALL);

const fn max_of(offsets: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < offsets.len() {
        if offsets[i] > max {
            max = offsets[i];
        }
        i += 1;
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in ALL.iter().skip(i + 1) {
                assert_ne!(a, b, "offset {a} mapped twice");
            }
        }
    }

    #[test]
    fn max_offset_is_regime() {
        assert_eq!(MAX_OFFSET, REGIME);
    }
}
