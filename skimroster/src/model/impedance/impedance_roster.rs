use super::{blend_ops, SkimValue};
use crate::{
    config::{DestinationScale, ImpedanceConfig},
    model::{
        matrix::{QuantizedMatrix, SkimMappings},
        roster::{RosterEntry, RosterError, RosterTable},
        vot::{VotGroupResolver, VotRange},
    },
};
use skimroster_core::{
    model::{
        constants::{EPSILON, INTRAZONAL_DISTANCE_MILES},
        Mode, PathType, SkimLocation, VotGroup,
    },
    util::geo_utils,
};

const DISTANCE_VARIABLE: &str = "distance";
const TIME_VARIABLES: [&str; 3] = ["ivtime", "time", "ivtfree"];

/// the built roster: entry table, vot groups and every loaded matrix.
///
/// immutable once built. queries take `&self` only, so one roster can be
/// shared across worker threads behind an `Arc` with no locking.
#[derive(Debug)]
pub struct ImpedanceRoster {
    table: RosterTable,
    matrices: Box<[QuantizedMatrix]>,
    vot: VotGroupResolver,
    settings: ImpedanceConfig,
    mappings: SkimMappings,
}

/// the resolved time-of-day and vot coordinates of a query, shared by the
/// primary entry and its blend entry
#[derive(Debug, Clone, Copy)]
struct QueryKey {
    vot_group: VotGroup,
    minute: usize,
}

impl ImpedanceRoster {
    /// `matrices` must be indexed by the table's matrix keys
    pub fn new(
        table: RosterTable,
        matrices: Vec<QuantizedMatrix>,
        vot: VotGroupResolver,
        settings: ImpedanceConfig,
        mappings: SkimMappings,
    ) -> ImpedanceRoster {
        ImpedanceRoster {
            table,
            matrices: matrices.into_boxed_slice(),
            vot,
            settings,
            mappings,
        }
    }

    /// impedance between two zones, given as dense zone indices.
    ///
    /// # Arguments
    ///
    /// * `variable` - roster variable name, such as "ivtime"
    /// * `mode` - travel mode
    /// * `path_type` - network variant
    /// * `vot` - value of time, resolved to a vot group
    /// * `minute` - minute on the roster clock, 1..=1440
    /// * `origin` - dense origin zone index
    /// * `destination` - dense destination zone index
    ///
    /// # Returns
    ///
    /// the scaled value and the blend distance, or -1 as the blend when the
    /// entry has none. zone-scale rosters replace zero intrazonal distances
    /// and times with fixed values.
    #[allow(clippy::too_many_arguments)]
    pub fn get_value(
        &self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        vot: f64,
        minute: usize,
        origin: usize,
        destination: usize,
    ) -> Result<SkimValue, RosterError> {
        let key = QueryKey {
            vot_group: self.vot.vot_group(vot)?,
            minute,
        };
        let entry = self
            .table
            .get_entry(variable, mode, path_type, key.vot_group, minute)?;
        self.zone_value(entry, key, origin, destination)
    }

    /// impedance between two point locations. at zone scale this is
    /// [`ImpedanceRoster::get_value`] on the containing zones. at parcel scale
    /// a blended entry pivots its value toward the point-to-point distance,
    /// taken from `circuity` when supplied and from the rectilinear distance
    /// between the points otherwise.
    #[allow(clippy::too_many_arguments)]
    pub fn get_value_for_locations<L: SkimLocation>(
        &self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        vot: f64,
        minute: usize,
        origin: &L,
        destination: &L,
        circuity: Option<f64>,
    ) -> Result<SkimValue, RosterError> {
        let key = QueryKey {
            vot_group: self.vot.vot_group(vot)?,
            minute,
        };
        let entry = self
            .table
            .get_entry(variable, mode, path_type, key.vot_group, minute)?;
        let (o, d) = (origin.zone_index(), destination.zone_index());
        if self.settings.destination_scale == DestinationScale::Zone {
            return self.zone_value(entry, key, o, d);
        }

        let value = match self.entry_value(entry, o, d)? {
            Some(v) => v,
            None => return Ok(SkimValue::zero()),
        };
        let blend_entry = match self.blend_entry(entry, key)? {
            Some(b) => b,
            None => return Ok(SkimValue::unblended(value)),
        };
        let network = self.entry_value(blend_entry, o, d)?.unwrap_or_default();

        let fraction = blend_ops::network_fraction(
            network,
            self.settings.maximum_blending_distance,
            origin.id() == destination.id(),
        );
        let manhattan =
            geo_utils::manhattan_distance_miles(&origin.coord(), &destination.coord());
        let xy = blend_ops::xy_distance(fraction, network, circuity, manhattan);
        let blended = blend_ops::blended_distance(fraction, network, xy);
        let pivoted = blend_ops::pivot(value, network, blended, entry.mode);
        Ok(SkimValue::new(pivoted, blended))
    }

    fn zone_value(
        &self,
        entry: &RosterEntry,
        key: QueryKey,
        origin: usize,
        destination: usize,
    ) -> Result<SkimValue, RosterError> {
        let fix_intrazonal =
            self.settings.destination_scale == DestinationScale::Zone && origin == destination;
        let mut value = match self.entry_value(entry, origin, destination)? {
            Some(v) => v,
            None => return Ok(SkimValue::zero()),
        };
        if fix_intrazonal && value < EPSILON {
            if entry.variable == DISTANCE_VARIABLE {
                value = self.intrazonal_distance();
            } else if TIME_VARIABLES.contains(&entry.variable.as_str()) {
                value = entry.mode.intrazonal_minutes();
            }
        }
        let blend_entry = match self.blend_entry(entry, key)? {
            Some(b) => b,
            None => return Ok(SkimValue::unblended(value)),
        };
        let mut blend = self
            .entry_value(blend_entry, origin, destination)?
            .unwrap_or_default();
        if fix_intrazonal && blend < EPSILON {
            blend = self.intrazonal_distance();
        }
        Ok(SkimValue::new(value, blend))
    }

    fn intrazonal_distance(&self) -> f64 {
        INTRAZONAL_DISTANCE_MILES * self.settings.distance_units_per_mile
    }

    /// the entry holding the blend variable for the same mode, vot group and
    /// minute, on the blend path type when one is configured
    fn blend_entry(
        &self,
        entry: &RosterEntry,
        key: QueryKey,
    ) -> Result<Option<&RosterEntry>, RosterError> {
        match &entry.blend_variable {
            None => Ok(None),
            Some(blend_variable) => self
                .table
                .get_entry(
                    blend_variable,
                    entry.mode,
                    entry.blend_path_type.unwrap_or(entry.path_type),
                    key.vot_group,
                    key.minute,
                )
                .map(Some),
        }
    }

    /// scaled value of an entry's matrix at a pair, or None for an empty matrix
    fn entry_value(
        &self,
        entry: &RosterEntry,
        origin: usize,
        destination: usize,
    ) -> Result<Option<f64>, RosterError> {
        let matrix = self.matrices.get(entry.matrix_index).ok_or_else(|| {
            RosterError::SkimMatrixNotFound {
                variable: entry.variable.clone(),
                matrix_index: entry.matrix_index,
            }
        })?;
        if matrix.is_empty() {
            return Ok(None);
        }
        let (o, d) = if entry.transpose {
            (destination, origin)
        } else {
            (origin, destination)
        };
        let raw = matrix
            .get(o, d)
            .ok_or_else(|| RosterError::LocationOutOfRange {
                variable: entry.variable.clone(),
                origin,
                destination,
                size: matrix.size(),
            })?;
        Ok(Some(raw as f64 / entry.scaling * entry.factor))
    }

    pub fn is_possible_combination(&self, mode: Mode, path_type: PathType) -> bool {
        self.table
            .combinations()
            .is_possible_combination(mode, path_type)
    }

    pub fn is_actual_combination(&self, mode: Mode, path_type: PathType) -> bool {
        self.table.combinations().is_actual_combination(mode, path_type)
    }

    pub fn vot_group(&self, vot: f64) -> Result<VotGroup, RosterError> {
        self.vot.vot_group(vot)
    }

    pub fn vot_ranges(&self) -> &[VotRange] {
        self.vot.ranges()
    }

    /// the entry a query with these arguments would read
    pub fn get_entry(
        &self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        vot: f64,
        minute: usize,
    ) -> Result<&RosterEntry, RosterError> {
        let vot_group = self.vot.vot_group(vot)?;
        self.table
            .get_entry(variable, mode, path_type, vot_group, minute)
    }

    pub fn variables(&self) -> &[String] {
        self.table.variables()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        self.table.entries()
    }

    pub fn matrix_count(&self) -> usize {
        self.matrices.len()
    }

    pub fn table(&self) -> &RosterTable {
        &self.table
    }

    pub fn mappings(&self) -> &SkimMappings {
        &self.mappings
    }

    pub fn settings(&self) -> &ImpedanceConfig {
        &self.settings
    }
}

#[cfg(test)]
mod test {
    use super::ImpedanceRoster;
    use crate::{
        config::{DestinationScale, ImpedanceConfig, TextSkimConfig, VotConfig},
        model::{
            impedance::SkimValue,
            matrix::{
                text_skim_reader::{fill_matrix, read_text_rows},
                IdMapping, QuantizedMatrix, SkimMappings,
            },
            roster::{RosterError, RosterTable},
            vot::VotGroupResolver,
        },
    };
    use rayon::prelude::*;
    use skimroster_core::model::{Mode, ParcelLocation, PathType};
    use std::sync::Arc;

    const COMBINATIONS: &str = "\
full-network,true,true,true,true,true,false,false,true,true,true
no-tolls,false,false,true,true,true,false,false,false,false,false
";

    const ROSTER: &str = "\
ivtime,sov,full-network,default,3:00,2:59,zone,text_ij,auto.txt,3,false,,,1,10
distance,sov,full-network,default,3:00,2:59,zone,text_ij,auto.txt,4,false,,,1,true
distance,walk,full-network,default,3:00,2:59,zone,text_ij,auto.txt,4,false,,,1,true
time,walk,full-network,default,3:00,2:59,zone,text_ij,auto.txt,4,false,distance,,20,true
toll,sov,full-network,default,3:00,2:59,zone,deferred,,,false
ivtime,hov2,full-network,default,3:00,2:59,zone,text_ij,auto.txt,3,true,distance,no-tolls,1,10
distance,hov2,no-tolls,default,3:00,2:59,zone,text_ij,auto.txt,4,false,,,1,true
";

    const AUTO_SKIM: &str = "\
1,1,0,0
1,2,12.0,3.5
1,3,20.0,6.0
2,1,11.0,3.4
2,2,0,0
2,3,8.0,2.0
3,1,19.0,5.9
3,2,8.5,2.5
3,3,1.0,0.3
";

    fn roster(scale: DestinationScale) -> ImpedanceRoster {
        roster_with(ImpedanceConfig {
            destination_scale: scale,
            ..Default::default()
        })
    }

    fn roster_with(settings: ImpedanceConfig) -> ImpedanceRoster {
        let table = RosterTable::from_readers(COMBINATIONS.as_bytes(), ROSTER.as_bytes())
            .expect("roster parses");
        let zones = IdMapping::new([1, 2, 3]).expect("unique ids");
        let rows = read_text_rows(AUTO_SKIM.as_bytes(), "auto.txt", &TextSkimConfig::default())
            .expect("skim parses");
        let matrices = table
            .matrix_keys()
            .iter()
            .map(|key| {
                if key.file_type.is_deferred() {
                    QuantizedMatrix::Empty
                } else {
                    fill_matrix(&rows, &key.name, key.field, key.scaling.into_inner(), &zones)
                        .expect("matrix fills")
                }
            })
            .collect();
        ImpedanceRoster::new(
            table,
            matrices,
            VotGroupResolver::new(&VotConfig::default()),
            settings,
            SkimMappings::new(zones, None),
        )
    }

    fn zone_query(
        r: &ImpedanceRoster,
        variable: &str,
        mode: Mode,
        o: usize,
        d: usize,
    ) -> Result<SkimValue, RosterError> {
        r.get_value(variable, mode, PathType::FullNetwork, 15.0, 500, o, d)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, found {actual}"
        );
    }

    #[test]
    fn test_scaled_lookup() {
        let r = roster(DestinationScale::Zone);
        let v = zone_query(&r, "ivtime", Mode::Sov, 0, 1).expect("ivtime");
        assert_eq!(v, SkimValue::new(12.0, -1.0));
        assert!(!v.has_blend());
        let v = zone_query(&r, "distance", Mode::Sov, 2, 0).expect("distance");
        assert_eq!(v.variable, 5.9);
        assert_eq!(r.matrix_count(), 3);
    }

    #[test]
    fn test_intrazonal_fix_at_zone_scale() {
        let r = roster(DestinationScale::Zone);
        let distance = zone_query(&r, "distance", Mode::Sov, 1, 1).expect("distance");
        assert_eq!(distance.variable, 0.25);
        let ivtime = zone_query(&r, "ivtime", Mode::Sov, 0, 0).expect("ivtime");
        assert_eq!(ivtime.variable, 1.0);
        // non-zero intrazonal values are kept
        let ivtime = zone_query(&r, "ivtime", Mode::Sov, 2, 2).expect("ivtime");
        assert_eq!(ivtime.variable, 1.0);
        let walk = zone_query(&r, "time", Mode::Walk, 0, 0).expect("walk time");
        assert_eq!(walk, SkimValue::new(5.0, 0.25));
    }

    #[test]
    fn test_intrazonal_distance_in_feet() {
        let r = roster_with(ImpedanceConfig {
            destination_scale: DestinationScale::Zone,
            distance_units_per_mile: 5280.0,
            ..Default::default()
        });
        let distance = zone_query(&r, "distance", Mode::Sov, 1, 1).expect("distance");
        assert_eq!(distance.variable, 1320.0);
        let walk = zone_query(&r, "time", Mode::Walk, 0, 0).expect("walk time");
        assert_eq!(walk, SkimValue::new(5.0, 1320.0));
    }

    #[test]
    fn test_no_intrazonal_fix_at_parcel_scale() {
        let r = roster(DestinationScale::Parcel);
        let distance = zone_query(&r, "distance", Mode::Sov, 1, 1).expect("distance");
        assert_eq!(distance.variable, 0.0);
    }

    #[test]
    fn test_deferred_entry_is_zero() {
        let r = roster(DestinationScale::Zone);
        let toll = zone_query(&r, "toll", Mode::Sov, 0, 2).expect("toll");
        assert_eq!(toll, SkimValue::zero());
    }

    #[test]
    fn test_blend_and_transpose() {
        let r = roster(DestinationScale::Zone);
        let walk = zone_query(&r, "time", Mode::Walk, 0, 1).expect("walk time");
        assert_eq!(walk, SkimValue::new(70.0, 3.5));
        // transposed primary, blend on the no-tolls path type
        let hov = zone_query(&r, "ivtime", Mode::Hov2, 0, 1).expect("hov2 ivtime");
        assert_eq!(hov, SkimValue::new(11.0, 3.5));
    }

    #[test]
    fn test_query_errors() {
        let r = roster(DestinationScale::Zone);
        assert!(matches!(
            zone_query(&r, "fare", Mode::Sov, 0, 1),
            Err(RosterError::VariableNotFound(_))
        ));
        assert!(matches!(
            zone_query(&r, "ivtime", Mode::Bike, 0, 1),
            Err(RosterError::RosterEntryNotFound { .. })
        ));
        assert!(matches!(
            r.get_value("ivtime", Mode::Sov, PathType::FullNetwork, 15.0, 0, 0, 1),
            Err(RosterError::MinuteOutOfRange(0))
        ));
        assert!(matches!(
            r.get_value("ivtime", Mode::Sov, PathType::FullNetwork, f64::NAN, 1, 0, 1),
            Err(RosterError::VotGroupNotFound(_))
        ));
        assert!(matches!(
            zone_query(&r, "ivtime", Mode::Sov, 0, 7),
            Err(RosterError::LocationOutOfRange { size: 3, .. })
        ));
    }

    #[test]
    fn test_locations_at_zone_scale_use_zones() {
        let r = roster(DestinationScale::Zone);
        let a = ParcelLocation::new(10, 0, 0.0, 0.0);
        let b = ParcelLocation::new(11, 0, 1320.0, 0.0);
        let v = r
            .get_value_for_locations("distance", Mode::Sov, PathType::FullNetwork, 15.0, 500, &a, &b, None)
            .expect("distance");
        assert_eq!(v.variable, 0.25);
    }

    #[test]
    fn test_parcel_pivot_long_trip_uses_network() {
        let r = roster(DestinationScale::Parcel);
        let a = ParcelLocation::new(10, 0, 0.0, 0.0);
        let b = ParcelLocation::new(20, 1, 5280.0, 0.0);
        let v = r
            .get_value_for_locations("time", Mode::Walk, PathType::FullNetwork, 15.0, 500, &a, &b, None)
            .expect("walk time");
        assert_eq!(v, SkimValue::new(70.0, 3.5));
    }

    #[test]
    fn test_parcel_pivot_short_trip() {
        let r = roster(DestinationScale::Parcel);
        let a = ParcelLocation::new(10, 1, 0.0, 0.0);
        let b = ParcelLocation::new(20, 2, 2640.0, 0.0);
        // network 2.0 miles, fraction 2/3, xy 0.5 miles
        let v = r
            .get_value_for_locations("time", Mode::Walk, PathType::FullNetwork, 15.0, 500, &a, &b, None)
            .expect("walk time");
        assert_close(v.blend_variable, 1.5);
        assert_close(v.variable, 30.0);
        let v = r
            .get_value_for_locations("time", Mode::Walk, PathType::FullNetwork, 15.0, 500, &a, &b, Some(1.0))
            .expect("walk time with circuity");
        assert_close(v.blend_variable, 5.0 / 3.0);
        assert_close(v.variable, 40.0 * 5.0 / 6.0);
    }

    #[test]
    fn test_parcel_pivot_without_network_distance() {
        let r = roster(DestinationScale::Parcel);
        let a = ParcelLocation::new(10, 0, 0.0, 0.0);
        let b = ParcelLocation::new(11, 0, 1320.0, 0.0);
        let v = r
            .get_value_for_locations("time", Mode::Walk, PathType::FullNetwork, 15.0, 500, &a, &b, None)
            .expect("walk time");
        assert_eq!(v, SkimValue::new(5.0, 0.25));
        let same = r
            .get_value_for_locations("time", Mode::Walk, PathType::FullNetwork, 15.0, 500, &a, &a, None)
            .expect("same parcel");
        assert_eq!(same, SkimValue::new(0.0, 0.0));
        let unblended = r
            .get_value_for_locations("ivtime", Mode::Sov, PathType::FullNetwork, 15.0, 500, &a, &b, None)
            .expect("sov ivtime");
        assert_eq!(unblended, SkimValue::new(0.0, -1.0));
    }

    #[test]
    fn test_introspection() {
        let r = roster(DestinationScale::Zone);
        assert!(r.is_possible_combination(Mode::Bike, PathType::FullNetwork));
        assert!(!r.is_actual_combination(Mode::Bike, PathType::FullNetwork));
        assert!(r.is_actual_combination(Mode::Hov2, PathType::NoTolls));
        assert_eq!(r.vot_ranges().len(), 5);
        assert_eq!(r.variables(), &["distance", "ivtime", "time", "toll"]);
        assert_eq!(r.entries().len(), 7);
        let entry = r
            .get_entry("ivtime", Mode::Hov2, PathType::FullNetwork, 40.0, 1)
            .expect("hov2 entry");
        assert!(entry.transpose);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_concurrent_reads() {
        assert_send_sync::<ImpedanceRoster>();
        let r = Arc::new(roster(DestinationScale::Zone));
        let expected = zone_query(&r, "time", Mode::Walk, 0, 1).expect("walk time");
        let results: Vec<SkimValue> = (0..1000)
            .into_par_iter()
            .map(|i| {
                let r = Arc::clone(&r);
                r.get_value("time", Mode::Walk, PathType::FullNetwork, 1.0 + i as f64, 1 + i % 1440, 0, 1)
                    .expect("concurrent query")
            })
            .collect();
        assert!(results.iter().all(|v| *v == expected));
    }
}
