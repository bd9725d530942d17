use dive_planner::{
    surface_air_partial_pressure, CompartmentParams, Depth, Mix, Time, Water, ZHL_16A_HALF_LIVES,
};

pub mod fixtures;

// general high-level model tests

#[test]
fn test_zhl_16a_table() {
    assert_eq!(ZHL_16A_HALF_LIVES.len(), 17);
    // fastest compartment subdivided into 1a and 1b for conservatism
    assert_eq!(ZHL_16A_HALF_LIVES[0], 4.);
    assert_eq!(ZHL_16A_HALF_LIVES[1], 5.);
    assert_eq!(ZHL_16A_HALF_LIVES[16], 635.);

    for half_life in ZHL_16A_HALF_LIVES {
        let params = CompartmentParams::create(half_life);
        assert_close_to_abs!(params.a, 2. * half_life.powf(-1. / 3.), 5e-5);
        assert_close_to_abs!(params.b, 1.005 - half_life.powf(-1. / 2.), 5e-5);
    }
}

#[test]
fn test_surface_air_equilibrium_is_fixed_point() {
    let mut model = fixtures::model_gf(Water::Salt, (0.3, 0.7));
    let surface_air = surface_air_partial_pressure();
    model.equilibrium(&surface_air);
    let initial = model.pressures().unwrap();

    model.update(&surface_air, Time::from_minutes(60.)).unwrap();

    let after = model.pressures().unwrap();
    for (a, b) in initial.iter().zip(after.iter()) {
        assert_close_to_abs!(a, b, 1e-9);
    }
    assert!(model.ceiling(1.).unwrap() <= Depth::zero());
}

#[test]
fn test_bottom_time_raises_ceiling_monotonically() {
    let mut model = fixtures::model_gf(Water::Salt, (0.3, 0.7));
    model.equilibrium(&surface_air_partial_pressure());

    let bottom = Mix::air().partial_pressure(Depth::from_meters(35.), Water::Salt);
    let mut previous = model.ceiling(1.).unwrap();
    for _ in 0..6 {
        model.update(&bottom, Time::from_minutes(5.)).unwrap();
        let ceiling = model.ceiling(1.).unwrap();
        assert!(ceiling >= previous);
        previous = ceiling;
    }
    assert!(previous > Depth::zero());
}

#[test]
fn test_gradient_recovers_during_offgassing() {
    let mut model = fixtures::model_gf(Water::Salt, (0.3, 0.7));
    model.equilibrium(&surface_air_partial_pressure());

    let bottom = Mix::air().partial_pressure(Depth::from_meters(30.), Water::Salt);
    model.update(&bottom, Time::from_minutes(25.)).unwrap();

    let stop_depth = Depth::from_meters(6.);
    let stop = Mix::air().partial_pressure(stop_depth, Water::Salt);
    let loaded = model.gradient_at_depth(stop_depth).unwrap();
    model.update(&stop, Time::from_minutes(10.)).unwrap();
    let rested = model.gradient_at_depth(stop_depth).unwrap();
    assert!(rested < loaded);
}
