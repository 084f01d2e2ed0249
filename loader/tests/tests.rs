use euclid::default::{Point2D, Vector2D};
use loader::prefabs::{self, systems};
use loader::{load, SystemBuilder, SystemEntry};

// ==================================================================================
// Builder tests
// ==================================================================================

#[test]
fn nested_entries_resolve_to_absolute_kinematics() {
    let specs = SystemBuilder::new()
        .add(
            SystemEntry::body(200.0, Point2D::new(10.0, 0.0), Vector2D::new(0.0, 5.0)).with(
                SystemEntry::body(1.0, Point2D::new(0.0, 30.0), Vector2D::new(-7.0, 0.0)),
            ),
        )
        .construct();

    assert_eq!(specs.len(), 2);
    // Child position and velocity both stack on the parent's.
    assert_eq!(specs[1].position, Point2D::new(10.0, 30.0));
    assert_eq!(specs[1].velocity, Vector2D::new(-7.0, 5.0));
}

#[test]
fn locus_offsets_children_without_adding_a_body() {
    let specs = SystemBuilder::new()
        .add(
            SystemEntry::locus(Point2D::new(-500.0, 0.0)).with(SystemEntry::body(
                5.0,
                Point2D::new(20.0, 0.0),
                Vector2D::zero(),
            )),
        )
        .construct();

    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].position, Point2D::new(-480.0, 0.0));
}

#[test]
fn swarms_are_deterministic_per_seed() {
    let build = |seed| {
        SystemBuilder::new()
            .add(
                SystemEntry::body(200.0, Point2D::zero(), Vector2D::zero()).with(
                    SystemEntry::Swarm {
                        count: 12,
                        min_mass: 0.1,
                        max_mass: 0.5,
                        min_orbit: 100.0,
                        max_orbit: 200.0,
                        mass_spread: 1.0,
                        seed,
                        clockwise: false,
                    },
                ),
            )
            .construct()
    };

    let a = build(7);
    let b = build(7);
    let c = build(8);
    assert_eq!(a, b);
    assert_ne!(a, c);

    // Every rock sits inside the requested annulus.
    for rock in a.iter().skip(1) {
        let r = rock.position.to_vector().length();
        assert!((100.0..200.0).contains(&r), "orbit radius {}", r);
        assert!((0.1..=0.5).contains(&rock.mass));
    }
}

// ==================================================================================
// Prefab tests
// ==================================================================================

#[test]
fn registry_knows_every_prefab() {
    for name in prefabs::preset_names() {
        let specs = prefabs::preset(name).unwrap();
        assert!(!specs.is_empty(), "prefab {} is empty", name);
        for spec in &specs {
            assert!(spec.mass > 0.0);
        }
    }
    assert!(prefabs::preset("atlantis").is_none());
}

#[test]
fn four_star_ballet_is_momentum_balanced() {
    let specs = systems::four_star_ballet();
    let momentum: Vector2D<f64> = specs
        .iter()
        .fold(Vector2D::zero(), |sum, s| sum + s.velocity * s.mass);
    assert!(momentum.length() < 1e-9);
}

#[test]
fn slingshot_modes_are_momentum_balanced() {
    let modes = [
        (systems::slingshot(), 3),
        (systems::double_slingshot(), 4),
        (systems::double_double(), 4),
    ];
    for (specs, count) in modes.iter() {
        assert_eq!(specs.len(), *count);
        let momentum: Vector2D<f64> = specs
            .iter()
            .fold(Vector2D::zero(), |sum, s| sum + s.velocity * s.mass);
        assert!(momentum.length() < 1e-9, "net momentum {:?}", momentum);
    }
    for name in ["slingshot", "double_slingshot", "double_double"].iter() {
        assert!(prefabs::preset(name).is_some(), "{} not registered", name);
    }
}

#[test]
fn sun_planet_moon_keeps_the_moon_by_the_planet() {
    let specs = systems::sun_planet_moon();
    assert_eq!(specs.len(), 3);
    let planet = specs[1];
    let moon = specs[2];
    assert!((moon.position - planet.position).length() < 30.0);
}

#[test]
fn asteroid_belt_is_reproducible() {
    let a = systems::asteroid_belt();
    let b = systems::asteroid_belt();
    assert_eq!(a.len(), 25);
    assert_eq!(a, b);
}

// ==================================================================================
// File format tests
// ==================================================================================

#[test]
fn loads_a_nested_json5_system() {
    let contents = r#"
        [
            // A star with a planet; the planet's numbers are relative.
            {
                mass: 200, pos: [0, 0], vel: [0, -6],
                children: [
                    { mass: 10, pos: [150, 0], vel: [0, 126] },
                ],
            },
        ]
    "#;
    let specs = load(contents).unwrap();

    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].mass, 200.0);
    assert_eq!(specs[1].position, Point2D::new(150.0, 0.0));
    // Relative velocity stacked on the parent's.
    assert_eq!(specs[1].velocity, Vector2D::new(0.0, 120.0));
    assert!(specs[1].active);
}

#[test]
fn inactive_flag_and_swarm_defaults_parse() {
    let contents = r#"
        [
            { mass: 200, pos: [0, 0], vel: [0, 0], active: false },
            { count: 4, min_mass: 0.1, max_mass: 0.2, min_orbit: 50, max_orbit: 90 },
        ]
    "#;
    let specs = load(contents).unwrap();

    assert_eq!(specs.len(), 5);
    assert!(!specs[0].active);
    for rock in specs.iter().skip(1) {
        assert!(rock.active);
    }
}

#[test]
fn a_bare_string_references_a_prefab() {
    let specs = load("\"sun_planet\"").unwrap();
    assert_eq!(specs, systems::sun_planet());
}

#[test]
fn unknown_prefab_is_a_real_error() {
    let err = load("\"atlantis\"").unwrap_err();
    assert!(err.to_string().contains("atlantis"));
}

#[test]
fn garbage_input_reports_a_parse_error() {
    assert!(load("{ this is not json5").is_err());
}
