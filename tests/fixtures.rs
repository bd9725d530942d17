use dive_planner::{
    BuhlmannConfig, BuhlmannModel, GradientFactors, Mix, Plan, Scr, TankConfig, TankLoadout,
    TankType, Water,
};

pub fn model_gf(water: Water, gf: GradientFactors) -> BuhlmannModel {
    let config = BuhlmannConfig::new()
        .with_water(water)
        .with_gradient_factors(gf.0, gf.1);
    BuhlmannModel::new(config).unwrap()
}

pub fn air_loadout() -> TankLoadout {
    let mut tanks = TankLoadout::new();
    tanks.insert(
        "bottom".to_string(),
        TankConfig {
            tank_type: TankType::Al80,
            pressure: 200.,
            mix: Mix::air(),
        },
    );
    tanks
}

pub fn salt_air_plan(gf: GradientFactors) -> Plan {
    Plan::new(Water::Salt, gf, Scr::new(15., 12.), air_loadout()).unwrap()
}

#[macro_export]
macro_rules! assert_close_to_abs {
    ($a:expr, $b:expr, $tolerance:expr) => {
        if ($a - $b).abs() > $tolerance {
            panic!(
                "{} is not close to {} with tolerance of {}",
                $a, $b, $tolerance
            );
        }
    };
}
