use crate::common::{
    scr_at_depth, Depth, GradientFactors, Mix, Pressure, Scr, TankType, Time, ValidationError,
    Volume, VolumeRate, Water,
};

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tank of the dive loadout as configured at the start of the dive.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TankConfig {
    pub tank_type: TankType,
    /// Fill pressure at the start of the dive [bar].
    pub pressure: Pressure,
    /// What gas is in the tank.
    pub mix: Mix,
}

impl TankConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pressure <= 0. {
            return Err(ValidationError::new("tank", "starting with an empty tank"));
        }
        Ok(())
    }
}

/// Tanks by the name the user gives to each.
pub type TankLoadout = BTreeMap<String, TankConfig>;

/// One vertex of the depth profile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Time elapsed since the beginning of the dive.
    pub time: Time,
    /// Distance below the surface.
    pub depth: Depth,
    /// Name of the tank in use from this point forward to the next point.
    pub tank: String,
}

impl Point {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.time < Time::zero() {
            return Err(ValidationError::new("point", "negative time"));
        }
        if self.depth < Depth::zero() {
            return Err(ValidationError::new("point", "negative depth"));
        }
        Ok(())
    }
}

pub type Profile = Vec<Point>;

/// A coarse dive plan provided by the user; all computations run on this
/// input. May or may not include the final ascent; `replan` supplies one
/// when it doesn't.
///
/// Mutable only while building; after `finalize` the profile is frozen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plan {
    water: Water,
    gf: GradientFactors,
    scr: Scr,
    tanks: TankLoadout,
    profile: Profile,
    current_tank: Option<String>,
    finalized: bool,
}

impl Plan {
    pub fn new(
        water: Water,
        gf: GradientFactors,
        scr: Scr,
        tanks: TankLoadout,
    ) -> Result<Self, ValidationError> {
        scr.validate()?;
        if tanks.is_empty() {
            return Err(ValidationError::new("tanks", "at least one tank required"));
        }
        for tank in tanks.values() {
            tank.validate()?;
        }
        let (gf_low, gf_high) = gf;
        if !(gf_low > 0. && gf_low <= 1.) || !(gf_high > 0. && gf_high <= 1.) {
            return Err(ValidationError::new("gf", "GF values must be in (0, 1] range"));
        }
        if gf_low > gf_high {
            return Err(ValidationError::new("gf", "GF low can't be higher than GF high"));
        }
        Ok(Self {
            water,
            gf,
            scr,
            tanks,
            profile: Vec::new(),
            current_tank: None,
            finalized: false,
        })
    }

    /// Select the tank used by subsequent segments.
    pub fn set_tank(&mut self, name: &str) -> Result<(), ValidationError> {
        if !self.tanks.contains_key(name) {
            return Err(ValidationError::new("tank", "unknown tank name"));
        }
        self.current_tank = Some(String::from(name));
        Ok(())
    }

    /// Append a segment lasting `duration` and ending at `depth`. The first
    /// segment starts from the implicit surface point at time zero.
    pub fn add_segment(&mut self, duration: Time, depth: Depth) -> Result<(), ValidationError> {
        if self.finalized {
            return Err(ValidationError::new("profile", "finalized already"));
        }
        let tank = match &self.current_tank {
            Some(name) => name.clone(),
            None => return Err(ValidationError::new("tank", "current tank not set")),
        };
        if duration <= Time::zero() {
            return Err(ValidationError::new("segment", "duration must be positive"));
        }
        if !duration.is_whole_minutes() {
            return Err(ValidationError::new(
                "segment",
                "time must be in integer (whole) minutes",
            ));
        }
        if depth < Depth::zero() {
            return Err(ValidationError::new("segment", "negative depth"));
        }
        if self.profile.is_empty() {
            self.profile.push(Point {
                time: Time::zero(),
                depth: Depth::zero(),
                tank: tank.clone(),
            });
        }
        let time = self.last_point().time + duration;
        let point = Point { time, depth, tank };
        point.validate()?;
        self.profile.push(point);
        Ok(())
    }

    pub fn finalize(&mut self) -> Result<(), ValidationError> {
        // scr, tanks and points were validated on the way in
        if self.profile.len() < 2 {
            return Err(ValidationError::new("profile", "need at least 2 points"));
        }
        self.finalized = true;
        Ok(())
    }

    pub fn finalized(&self) -> bool {
        self.finalized
    }

    /// Replace the profile wholesale. Only the planner uses this, to seed its
    /// output with the input plan's profile before extending it.
    pub(crate) fn set_profile(&mut self, profile: Profile) {
        self.current_tank = profile.last().map(|point| point.tank.clone());
        self.profile = profile;
    }

    pub fn water(&self) -> Water {
        self.water
    }

    pub fn gf(&self) -> GradientFactors {
        self.gf
    }

    pub fn scr(&self) -> Scr {
        self.scr
    }

    pub fn tanks(&self) -> &TankLoadout {
        &self.tanks
    }

    /// The tank selected by the last `set_tank`, used by `add_segment`.
    pub fn current_tank(&self) -> Option<&str> {
        self.current_tank.as_deref()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The last profile point. Only valid once a segment has been added.
    pub fn last_point(&self) -> &Point {
        self.profile.last().expect("empty profile")
    }

    /// Profile times in minutes, for interpolation.
    pub fn times(&self) -> Vec<f64> {
        self.profile.iter().map(|p| p.time.as_minutes()).collect()
    }

    /// Profile depths in meters, for interpolation.
    pub fn depths(&self) -> Vec<f64> {
        self.profile.iter().map(|p| p.depth.as_meters()).collect()
    }

    /// Name of the tank in effect at `time`: the tank of the last point at or
    /// before it.
    pub fn tank_at(&self, time: Time) -> &str {
        let mut name = &self.profile[0].tank;
        for point in &self.profile {
            if point.time <= time {
                name = &point.tank;
            } else {
                break;
            }
        }
        name
    }
}

/// Surface volume consumed between two profile points, breathing at `scr`
/// scaled by the ambient pressure of the average depth.
pub fn usage(
    pt0: &Point,
    pt1: &Point,
    scr: VolumeRate,
    water: Water,
) -> Result<Volume, ValidationError> {
    if pt1.time < pt0.time {
        return Err(ValidationError::new("points", "second point before first point"));
    }
    if scr <= 0. {
        return Err(ValidationError::new("scr", "negative or zero scr"));
    }
    let duration = pt1.time - pt0.time;
    let avg_depth = (pt0.depth + pt1.depth) * 0.5;
    let rate = scr_at_depth(scr, avg_depth, water);
    Ok(Volume::from_liters(rate * duration.as_minutes()))
}
