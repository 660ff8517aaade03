use super::{RosterCombinations, RosterEntry, RosterError};
use crate::model::matrix::SkimFileType;
use skimroster_core::{
    model::{Mode, PathType, VotGroup},
    util::{day_clock, token_ops},
};
use std::{fs::File, io::Read, path::Path, str::FromStr};

/// columns up to and including transpose are required. blend variable,
/// blend path type, factor and scaling may be omitted.
const REQUIRED_COLUMNS: usize = 11;
const TOTAL_COLUMNS: usize = 15;

/// scaling written as a boolean token: true stores hundredths, false units
const SCALING_TRUE: f64 = 100.0;
const SCALING_FALSE: f64 = 1.0;

pub fn read_roster_entries_from_csv(
    path: &Path,
    combinations: &mut RosterCombinations,
) -> Result<Vec<RosterEntry>, RosterError> {
    let filename = path.display().to_string();
    let file = File::open(path).map_err(|e| RosterError::ReadError {
        filepath: filename.clone(),
        error: e.to_string(),
    })?;
    read_roster_entries(file, &filename, combinations)
}

/// reads roster definition rows, validating each (mode, path type) pair
/// against `combinations` and marking the pair as actually used.
///
/// # Arguments
///
/// * `reader` - source of comma-delimited rows, '#' lines are comments
/// * `filename` - name reported in errors
/// * `combinations` - possible combinations, updated with the ones in use
///
/// # Returns
///
/// the entries in file order. variable and matrix indices are left at zero
/// and are assigned when the entries are collected into a roster table.
pub fn read_roster_entries<R: Read>(
    reader: R,
    filename: &str,
    combinations: &mut RosterCombinations,
) -> Result<Vec<RosterEntry>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = vec![];
    for row in csv_reader.records() {
        let record = row.map_err(|e| RosterError::InvalidRosterRow {
            filename: filename.to_string(),
            line: e.position().map(|p| p.line()).unwrap_or_default(),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let tokens: Vec<&str> = record.iter().collect();
        if tokens.iter().all(|t| t.is_empty()) {
            continue;
        }
        let entry = parse_entry(&tokens, filename, line)?;
        combinations.use_combination(entry.mode, entry.path_type, || {
            format!("{filename} line {line}")
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

fn parse_entry(tokens: &[&str], filename: &str, line: u64) -> Result<RosterEntry, RosterError> {
    let invalid = |message: String| RosterError::InvalidRosterRow {
        filename: filename.to_string(),
        line,
        message,
    };
    if tokens.len() < REQUIRED_COLUMNS || tokens.len() > TOTAL_COLUMNS {
        return Err(invalid(format!(
            "expected between {REQUIRED_COLUMNS} and {TOTAL_COLUMNS} columns, found {}",
            tokens.len()
        )));
    }
    let column = |i: usize| tokens.get(i).copied().unwrap_or_default();

    let variable = column(0);
    if variable.is_empty() {
        return Err(invalid(String::from("variable name is empty")));
    }
    let mode = Mode::from_str(column(1)).map_err(|e| invalid(e.to_string()))?;
    let path_type = PathType::from_str(column(2)).map_err(|_| RosterError::InvalidPathType {
        filename: filename.to_string(),
        line,
        token: column(2).to_string(),
    })?;
    let vot_group =
        VotGroup::parse_roster_token(column(3)).map_err(|e| invalid(e.to_string()))?;
    let start_minute = parse_minute(column(4)).map_err(&invalid)?;
    let end_minute = parse_minute(column(5)).map_err(&invalid)?;
    let length = column(6).to_string();
    let file_type = SkimFileType::from_str(column(7)).map_err(|e| {
        RosterError::UnsupportedFileType {
            file_type: column(7).to_string(),
            context: format!("{filename} line {line}: {e}"),
        }
    })?;
    let name = column(8).to_string();
    let field = match file_type {
        SkimFileType::Deferred if column(9).is_empty() => 0,
        _ => column(9)
            .parse::<usize>()
            .map_err(|e| invalid(format!("field '{}': {e}", column(9))))?,
    };
    let transpose = token_ops::parse_bool(column(10)).map_err(|e| invalid(e.to_string()))?;
    let blend_variable = Some(column(11))
        .filter(|t| !t.is_empty())
        .map(String::from);
    let blend_path_type = match column(12) {
        "" => None,
        token => Some(
            PathType::from_str(token).map_err(|_| RosterError::InvalidPathType {
                filename: filename.to_string(),
                line,
                token: token.to_string(),
            })?,
        ),
    };
    let factor = match column(13) {
        "" => 1.0,
        token => parse_positive(token, "factor").map_err(&invalid)?,
    };
    let scaling = parse_scaling(column(14)).map_err(&invalid)?;

    Ok(RosterEntry {
        variable: variable.to_string(),
        mode,
        path_type,
        vot_group,
        start_minute,
        end_minute,
        length,
        file_type,
        name,
        field,
        transpose,
        blend_variable,
        blend_path_type,
        factor,
        scaling,
        variable_index: 0,
        matrix_index: 0,
    })
}

fn parse_minute(token: &str) -> Result<usize, String> {
    day_clock::parse_clock_minutes(token)
        .map(day_clock::to_minutes_after_day_start)
        .map_err(|e| e.to_string())
}

fn parse_scaling(token: &str) -> Result<f64, String> {
    if token.is_empty() {
        return Ok(SCALING_FALSE);
    }
    match token_ops::parse_bool(token) {
        Ok(true) if !token.trim().eq("1") => Ok(SCALING_TRUE),
        Ok(false) if !token.trim().eq("0") => Ok(SCALING_FALSE),
        _ => parse_positive(token, "scaling"),
    }
}

fn parse_positive(token: &str, name: &str) -> Result<f64, String> {
    let value = token
        .parse::<f64>()
        .map_err(|e| format!("{name} '{token}': {e}"))?;
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        return Err(format!("{name} must be a positive number, found {token}"));
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::{parse_scaling, read_roster_entries};
    use crate::model::{
        matrix::SkimFileType,
        roster::{RosterCombinations, RosterError},
    };
    use skimroster_core::model::{Mode, PathType, VotGroup};

    fn combinations() -> RosterCombinations {
        let mut c = RosterCombinations::default();
        c.set_possible(Mode::Sov, PathType::FullNetwork, true);
        c.set_possible(Mode::Walk, PathType::FullNetwork, true);
        c
    }

    #[test]
    fn test_read_full_row() {
        let data = "\
# variable,mode,path type,vot,start,end,length,type,name,field,transpose,blend,blend pt,factor,scaling
time,walk,full-network,default,3:00,2:59,zone,text_ij,walk.txt,3,false,distance,,20,true
";
        let mut c = combinations();
        let entries = read_roster_entries(data.as_bytes(), "roster.csv", &mut c).expect("reads");
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.variable, "time");
        assert_eq!(e.mode, Mode::Walk);
        assert_eq!(e.vot_group, None);
        assert_eq!((e.start_minute, e.end_minute), (1, 1440));
        assert_eq!(e.file_type, SkimFileType::Text);
        assert_eq!(e.field, 3);
        assert_eq!(e.blend_variable.as_deref(), Some("distance"));
        assert_eq!(e.blend_path_type, None);
        assert_eq!(e.factor, 20.0);
        assert_eq!(e.scaling, 100.0);
        assert!(c.is_actual_combination(Mode::Walk, PathType::FullNetwork));
        assert!(!c.is_actual_combination(Mode::Sov, PathType::FullNetwork));
    }

    #[test]
    fn test_optional_trailing_columns() {
        let data = "toll,sov,full-network,high,360,539,zone,,,,false\n";
        let entries =
            read_roster_entries(data.as_bytes(), "roster.csv", &mut combinations()).expect("reads");
        let e = &entries[0];
        assert_eq!(e.vot_group, Some(VotGroup::High));
        assert_eq!((e.start_minute, e.end_minute), (181, 360));
        assert!(e.file_type.is_deferred());
        assert_eq!(e.factor, 1.0);
        assert_eq!(e.scaling, 1.0);
        assert_eq!(e.blend_variable, None);
    }

    #[test]
    fn test_impossible_combination_names_line() {
        let data = "# comment\nivtime,transit,full-network,default,3:00,2:59,zone,text_ij,t.txt,3,false\n";
        let err = read_roster_entries(data.as_bytes(), "roster.csv", &mut combinations())
            .unwrap_err();
        match err {
            RosterError::InvalidCombination { mode, context, .. } => {
                assert_eq!(mode, Mode::Transit);
                assert_eq!(context, "roster.csv line 2");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_invalid_tokens() {
        let bad_path_type = "ivtime,sov,autobahn,default,3:00,2:59,zone,text_ij,a.txt,3,false\n";
        assert!(matches!(
            read_roster_entries(bad_path_type.as_bytes(), "r.csv", &mut combinations()),
            Err(RosterError::InvalidPathType { .. })
        ));
        let bad_file_type = "ivtime,sov,full-network,default,3:00,2:59,zone,parquet,a.txt,3,false\n";
        assert!(matches!(
            read_roster_entries(bad_file_type.as_bytes(), "r.csv", &mut combinations()),
            Err(RosterError::UnsupportedFileType { .. })
        ));
        let too_short = "ivtime,sov,full-network,default,3:00,2:59\n";
        assert!(matches!(
            read_roster_entries(too_short.as_bytes(), "r.csv", &mut combinations()),
            Err(RosterError::InvalidRosterRow { .. })
        ));
        let bad_clock = "ivtime,sov,full-network,default,25:00,2:59,zone,text_ij,a.txt,3,false\n";
        assert!(matches!(
            read_roster_entries(bad_clock.as_bytes(), "r.csv", &mut combinations()),
            Err(RosterError::InvalidRosterRow { .. })
        ));
    }

    #[test]
    fn test_scaling_tokens() {
        assert_eq!(parse_scaling("true"), Ok(100.0));
        assert_eq!(parse_scaling("FALSE"), Ok(1.0));
        assert_eq!(parse_scaling("10"), Ok(10.0));
        assert_eq!(parse_scaling("1"), Ok(1.0));
        assert_eq!(parse_scaling(""), Ok(1.0));
        assert!(parse_scaling("0").is_err());
        assert!(parse_scaling("-5").is_err());
    }
}
