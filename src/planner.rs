use crate::buhlmann::{BuhlmannConfig, BuhlmannModel, Gradient};
use crate::common::constants::{
    ASCENT_RATE_FT_PER_MIN, MAX_DECO_PPO2, MAX_PLANNER_ITERATIONS, STOP_DEPTH_INC_FT,
    STOP_TIME_INC_MIN,
};
use crate::common::{
    math_utils, surface_air_partial_pressure, DecoCalculationError, Depth, Mix, Time,
    ValidationError, Water,
};
use crate::plan::{Plan, TankLoadout};

use alloc::string::String;

/// Extend a finalized plan whose profile ends underwater with a legal ascent
/// to the surface.
///
/// The input is never mutated; the returned plan repeats the input profile
/// and appends the decompression stops and ascents the tissue model demands.
/// Fails with [`DecoCalculationError::CannotPlanAscent`] when the ceiling
/// stops converging toward the surface.
pub fn replan(input: &Plan) -> Result<Plan, DecoCalculationError> {
    if !input.finalized() {
        return Err(ValidationError::new("plan", "input plan not finalized").into());
    }

    // start the output with the same configuration and profile
    let mut output = Plan::new(input.water(), input.gf(), input.scr(), input.tanks().clone())?;
    output.set_profile(input.profile().clone());

    // if the input already ends at the surface there is nothing to add
    if output.last_point().depth == Depth::zero() {
        output.finalize()?;
        return Ok(output);
    }

    let mut model = bootstrap_model(&output)?;
    plan_ascent(&mut output, &mut model)?;

    output.finalize()?;
    Ok(output)
}

/// Catch a fresh tissue model up to the last point the user gave us, assuming
/// an infinite surface interval preceding the dive.
fn bootstrap_model(plan: &Plan) -> Result<BuhlmannModel, DecoCalculationError> {
    let water = plan.water();
    let (gf_low, gf_high) = plan.gf();
    let config = BuhlmannConfig::new()
        .with_water(water)
        .with_gradient_factors(gf_low, gf_high);
    let mut model = BuhlmannModel::new(config)?;
    model.equilibrium(&surface_air_partial_pressure());

    for pair in plan.profile().windows(2) {
        let (p0, p1) = (&pair[0], &pair[1]);
        let duration = p1.time - p0.time;
        let mix = mix_of(plan, &p0.tank)?;
        let pp0 = mix.partial_pressure(p0.depth, water);
        if p0.depth == p1.depth {
            model.update(&pp0, duration)?;
        } else {
            let pp1 = mix.partial_pressure(p1.depth, water);
            model.variable_update(&pp0, &pp1, duration)?;
        }
    }
    Ok(model)
}

/// Iteratively append stops and ascents until the profile reaches the
/// surface.
fn plan_ascent(
    output: &mut Plan,
    model: &mut BuhlmannModel,
) -> Result<(), DecoCalculationError> {
    let water = output.water();
    let (gf_low, gf_high) = output.gf();
    let mut gradient = Gradient::new(gf_low, gf_high)?;
    let stop_time = Time::from_minutes(STOP_TIME_INC_MIN);

    let mut stop_duration = Time::zero();
    let mut iterations = 0usize;

    while output.last_point().depth > Depth::zero() {
        iterations += 1;
        if iterations > MAX_PLANNER_ITERATIONS {
            return Err(DecoCalculationError::CannotPlanAscent {
                stuck_depth: output.last_point().depth,
            });
        }

        let current_depth = output.last_point().depth;

        // breathe the richest mix that stays under the deco ppO2 limit here
        if let Some(best) = best_mix(output.tanks(), current_depth, water) {
            output.set_tank(&best)?;
        } else {
            return Err(ValidationError::new(
                "tanks",
                "no tank with tolerable ppO2 at current depth",
            )
            .into());
        }
        let tank = output.current_tank().expect("tank just set");
        let mix = mix_of(output, tank)?;
        let pp_current = mix.partial_pressure(current_depth, water);

        // walk candidate stops one increment shallower at a time, accepting
        // each one the tissues could tolerate on arrival
        let mut ceiling = current_depth;
        let mut ascent_duration = Time::zero();
        loop {
            let candidate = round_to_stop_depth(ceiling - stop_depth_inc());
            let test_duration = ascent_duration_to(current_depth, candidate);
            let pp_candidate = mix.partial_pressure(candidate, water);
            let mut test_model = model.clone();
            test_model.variable_update(&pp_current, &pp_candidate, test_duration)?;
            if test_model.gradient_at_depth(candidate)? <= gradient.at(candidate) {
                ceiling = candidate;
                ascent_duration = test_duration;
                if ceiling <= Depth::zero() {
                    break;
                }
            } else {
                break;
            }
        }

        if ceiling >= current_depth {
            // can't ascend a full increment yet; wait a minute at this depth.
            // don't record the point until the stop is over, so the profile
            // gets one point per stop rather than one per minute.
            model.update(&pp_current, stop_time)?;
            stop_duration += stop_time;
            continue;
        }

        // record the stop that just ended
        if stop_duration > Time::zero() {
            output.add_segment(stop_duration, current_depth)?;
            stop_duration = Time::zero();
        }

        // the first stop pins the gradient factor slope
        if !gradient.sloped() && ceiling > Depth::zero() {
            gradient.ascend_from(ceiling);
        }

        let pp_ceiling = mix.partial_pressure(ceiling, water);
        model.variable_update(&pp_current, &pp_ceiling, ascent_duration)?;
        output.add_segment(ascent_duration, ceiling)?;
    }

    debug_assert!(output.last_point().depth == Depth::zero());
    Ok(())
}

/// Among tanks breathable at this depth (ppO2 within the deco limit), the one
/// with the lowest nitrogen partial pressure; ties go to the tank with the
/// most configured pressure.
// TODO: check for hypoxia here also
fn best_mix(tanks: &TankLoadout, depth: Depth, water: Water) -> Option<String> {
    let mut best: Option<(&String, f64, f64)> = None;
    for (name, config) in tanks {
        let pp = config.mix.partial_pressure(depth, water);
        if pp.o2 > MAX_DECO_PPO2 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, best_n2, best_pressure)) => {
                pp.n2 < best_n2 || (pp.n2 == best_n2 && config.pressure > best_pressure)
            }
        };
        if better {
            best = Some((name, pp.n2, config.pressure));
        }
    }
    best.map(|(name, ..)| name.clone())
}

fn mix_of(plan: &Plan, tank: &str) -> Result<Mix, DecoCalculationError> {
    plan.tanks()
        .get(tank)
        .map(|config| config.mix)
        .ok_or_else(|| ValidationError::new("tank", "unknown tank name").into())
}

fn stop_depth_inc() -> Depth {
    Depth::from_feet(STOP_DEPTH_INC_FT)
}

/// Round to the nearest stop increment, clamped at the surface.
fn round_to_stop_depth(depth: Depth) -> Depth {
    let ft = math_utils::round(depth.as_feet() / STOP_DEPTH_INC_FT) * STOP_DEPTH_INC_FT;
    if ft <= 0. {
        Depth::zero()
    } else {
        Depth::from_feet(ft)
    }
}

/// Travel time at the fixed ascent rate, rounded up to a whole number of stop
/// time increments, never zero.
fn ascent_duration_to(from: Depth, to: Depth) -> Time {
    let distance = from - to;
    let minutes = math_utils::ceil(
        distance.as_feet() / ASCENT_RATE_FT_PER_MIN / STOP_TIME_INC_MIN,
    ) * STOP_TIME_INC_MIN;
    if minutes < STOP_TIME_INC_MIN {
        Time::from_minutes(STOP_TIME_INC_MIN)
    } else {
        Time::from_minutes(minutes)
    }
}
