//! Fixed-offset report parser.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::columns;
use crate::schema::WellRecord;
use crate::{ReportError, ReportResult};

/// Parse a tech-regime report file into well records, preserving row order.
pub fn parse(path: &Path) -> ReportResult<Vec<WellRecord>> {
    let file = File::open(path)?;
    parse_reader(file)
}

/// Parse report content from any reader.
///
/// The first [`columns::HEADER_ROWS`] rows are skipped unconditionally. Fully
/// blank data rows are dropped. A data row narrower than the widest mapped
/// offset fails the whole parse, as does non-numeric content in a numeric
/// column; blank cells become `None`.
pub fn parse_reader<R: Read>(reader: R) -> ReportResult<Vec<WellRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        if idx < columns::HEADER_ROWS {
            continue;
        }
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // 1-based row numbers in errors, matching what a spreadsheet shows.
        records.push(read_row(&row, idx + 1)?);
    }
    Ok(records)
}

fn read_row(row: &StringRecord, row_no: usize) -> ReportResult<WellRecord> {
    if row.len() <= columns::MAX_OFFSET {
        return Err(ReportError::ShortRow {
            row: row_no,
            needed: columns::MAX_OFFSET + 1,
            found: row.len(),
        });
    }

    Ok(WellRecord {
        well_name: text(row, columns::WELL_NAME).unwrap_or_default(),
        field: text(row, columns::FIELD),
        d_cas: number(row, row_no, columns::D_CAS, "d_cas")?,
        d_tub: number(row, row_no, columns::D_TUB, "d_tub")?,
        d_ch: number(row, row_no, columns::D_CH, "d_ch")?,
        h_perf: number(row, row_no, columns::H_PERF, "h_perf")?,
        ext_h_perf: number(row, row_no, columns::EXT_H_PERF, "ext_h_perf")?,
        h_tub: number(row, row_no, columns::H_TUB, "h_tub")?,
        ext_h_tub: number(row, row_no, columns::EXT_H_TUB, "ext_h_tub")?,
        al_type: text(row, columns::AL_TYPE),
        esp_type: text(row, columns::ESP_TYPE),
        rate_nom: number(row, row_no, columns::RATE_NOM, "rate_nom")?,
        head_nom: number(row, row_no, columns::HEAD_NOM, "head_nom")?,
        freq: number(row, row_no, columns::FREQ, "freq")?,
        k_sep: number(row, row_no, columns::K_SEP, "k_sep")?,
        p_wh: number(row, row_no, columns::P_WH, "p_wh")?,
        p_fl: number(row, row_no, columns::P_FL, "p_fl")?,
        p_res: number(row, row_no, columns::P_RES, "p_res")?,
        p_in: number(row, row_no, columns::P_IN, "p_in")?,
        p_wf: number(row, row_no, columns::P_WF, "p_wf")?,
        q_liq: number(row, row_no, columns::Q_LIQ, "q_liq")?,
        wct: number(row, row_no, columns::WCT, "wct")?,
        rp: number(row, row_no, columns::RP, "rp")?,
        pb: number(row, row_no, columns::PB, "pb")?,
        rsb: number(row, row_no, columns::RSB, "rsb")?,
        t_res: number(row, row_no, columns::T_RES, "t_res")?,
        muob: number(row, row_no, columns::MUOB, "muob")?,
        bob: number(row, row_no, columns::BOB, "bob")?,
        gamma_oil: number(row, row_no, columns::GAMMA_OIL, "gamma_oil")?,
        gamma_wat: number(row, row_no, columns::GAMMA_WAT, "gamma_wat")?,
        pi: number(row, row_no, columns::PI, "pi")?,
        regime: text(row, columns::REGIME),
        work_type: text(row, columns::WORK_TYPE),
    })
}

fn text(row: &StringRecord, column: usize) -> Option<String> {
    let cell = row.get(column)?.trim();
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn number(
    row: &StringRecord,
    row_no: usize,
    column: usize,
    field: &'static str,
) -> ReportResult<Option<f64>> {
    let Some(cell) = row.get(column) else {
        return Ok(None);
    };
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| ReportError::BadNumber {
            row: row_no,
            column,
            field,
            value: cell.to_string(),
        })
}
