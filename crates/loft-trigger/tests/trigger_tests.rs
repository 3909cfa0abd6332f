use std::collections::HashMap;

use loft_geom::{Direction, Vec3};
use loft_materials::{LaunchConfig, LaunchRules, MaterialCatalog, MaterialId};
use loft_pads::{PadEntry, PadRegistry, Position, WorldId};
use loft_trigger::{ContactFilter, MovementSample, decide, movement_contact, plate_contact};

fn world() -> WorldId {
    WorldId::new("overworld")
}

fn pos(x: i32, y: i32, z: i32) -> Position {
    Position::new(world(), x, y, z)
}

struct Fixture {
    registry: PadRegistry,
    catalog: MaterialCatalog,
    rules: LaunchRules,
    blocks: HashMap<Position, MaterialId>,
    _dir: std::path::PathBuf,
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self._dir);
    }
}

impl Fixture {
    fn material(&self, key: &str) -> MaterialId {
        self.catalog.get_id(key).unwrap()
    }

    fn set_block(&mut self, position: Position, key: &str) {
        let id = self.material(key);
        self.blocks.insert(position, id);
    }

    fn movement(&self, movement: &MovementSample, filter: &ContactFilter) -> Option<Vec3> {
        movement_contact(
            &self.registry,
            &self.rules,
            &self.catalog,
            |p| self.blocks.get(p).copied(),
            movement,
            filter,
        )
        .map(|l| l.velocity)
    }
}

fn fixture(test: &str) -> Fixture {
    let catalog = MaterialCatalog::from_toml_str(
        r#"
        [materials.stone]
        [materials.slime_pad]
        [materials.light_plate]
        pressure_plate = true
        passable = true
        [materials.carpet]
        passable = true
    "#,
    )
    .unwrap();
    let rules = LaunchRules::compile(
        &catalog,
        &LaunchConfig {
            horizontal_velocity: Some(0.2),
            vertical_velocity: Some(1.0),
            materials: vec!["slime_pad".into(), "light_plate".into()],
            ..Default::default()
        },
    );
    let dir = std::env::temp_dir().join(format!("loft-trigger-{test}"));
    std::fs::create_dir_all(&dir).unwrap();
    Fixture {
        registry: PadRegistry::new(dir.join("pads.toml")),
        catalog,
        rules,
        blocks: HashMap::new(),
        _dir: dir,
    }
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6 && (a.z - b.z).abs() < 1e-6
}

#[test]
fn fixed_direction_overrides_facing() {
    let mut f = fixture("fixed-direction");
    let mut entry = PadEntry::new(pos(0, 63, 0));
    entry.set_horizontal(Some(2.0));
    entry.set_vertical(Some(0.5));
    entry.set_fixed_direction(Some(Direction::East));
    f.registry.register(entry);

    let stone = f.material("stone");
    for facing in Direction::ALL {
        let launch = decide(&f.registry, &f.rules, &pos(0, 63, 0), stone, facing).unwrap();
        assert!(approx(launch.velocity, Vec3::new(2.0, 0.5, 0.0)));
    }
}

#[test]
fn unfixed_pad_launches_along_facing() {
    let mut f = fixture("facing");
    let mut entry = PadEntry::new(pos(0, 63, 0));
    entry.set_horizontal(Some(1.0));
    entry.set_vertical(Some(0.0));
    f.registry.register(entry);

    let stone = f.material("stone");
    let launch = decide(&f.registry, &f.rules, &pos(0, 63, 0), stone, Direction::North).unwrap();
    assert!(approx(launch.velocity, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn registered_pad_resolves_unset_velocities_from_material_defaults() {
    let mut f = fixture("pad-defaults");
    f.registry.register(PadEntry::new(pos(0, 63, 0)));
    let slime = f.material("slime_pad");
    let launch = decide(&f.registry, &f.rules, &pos(0, 63, 0), slime, Direction::South).unwrap();
    assert!(approx(launch.velocity, Vec3::new(0.0, 1.0, 0.2)));
}

#[test]
fn bare_launch_material_uses_defaults_and_facing() {
    let f = fixture("bare-material");
    let slime = f.material("slime_pad");
    let launch = decide(&f.registry, &f.rules, &pos(5, 63, 5), slime, Direction::West).unwrap();
    assert!(approx(launch.velocity, Vec3::new(-0.2, 1.0, 0.0)));
}

#[test]
fn non_launch_material_without_pad_does_not_launch() {
    let f = fixture("no-launch");
    let stone = f.material("stone");
    assert!(decide(&f.registry, &f.rules, &pos(5, 63, 5), stone, Direction::West).is_none());
}

#[test]
fn plate_contact_on_registered_pad_ignores_material_checks() {
    let mut f = fixture("plate-pad");
    let mut entry = PadEntry::new(pos(0, 63, 0));
    entry.set_horizontal(Some(3.0));
    entry.set_vertical(Some(0.0));
    entry.set_fixed_direction(Some(Direction::South));
    f.registry.register(entry);

    let stone = f.material("stone");
    let launch = plate_contact(&f.registry, &f.rules, &pos(0, 63, 0), stone, Direction::North);
    assert!(approx(launch.unwrap().velocity, Vec3::new(0.0, 0.0, 3.0)));
}

#[test]
fn movement_onto_a_full_launch_block_probes_below_the_feet() {
    let mut f = fixture("movement-probe");
    f.set_block(pos(0, 63, 0), "slime_pad");
    let launch = f.movement(
        &MovementSample {
            world: world(),
            from: Vec3::new(-1.5, 64.0, 0.5),
            to: Vec3::new(0.5, 64.0, 0.5),
            facing: Direction::East,
            vertical_speed: 0.0,
        },
        &ContactFilter::default(),
    );
    assert!(approx(launch.unwrap(), Vec3::new(0.2, 1.0, 0.0)));
}

#[test]
fn standing_still_does_not_retrigger() {
    let mut f = fixture("standing-still");
    f.set_block(pos(0, 63, 0), "slime_pad");
    let at = Vec3::new(0.5, 64.0, 0.5);
    let launch = f.movement(
        &MovementSample {
            world: world(),
            from: at,
            to: at,
            facing: Direction::East,
            vertical_speed: 0.0,
        },
        &ContactFilter::default(),
    );
    assert!(launch.is_none());
}

#[test]
fn passable_footing_over_open_space_does_not_launch() {
    let mut f = fixture("passable-footing");
    // A carpet hangs over air: the probe below the feet lands in the carpet
    // block, which cannot support the actor.
    f.set_block(pos(0, 63, 0), "carpet");
    let launch = f.movement(
        &MovementSample {
            world: world(),
            from: Vec3::new(-1.5, 64.0, 0.5),
            to: Vec3::new(0.5, 64.0, 0.5),
            facing: Direction::East,
            vertical_speed: 0.0,
        },
        &ContactFilter::default(),
    );
    assert!(launch.is_none());
}

#[test]
fn pressure_plates_are_excluded_from_the_movement_path() {
    let mut f = fixture("movement-plate");
    // Actor's feet are inside the plate block itself.
    f.set_block(pos(0, 64, 0), "light_plate");
    let launch = f.movement(
        &MovementSample {
            world: world(),
            from: Vec3::new(-1.5, 64.1, 0.5),
            to: Vec3::new(0.5, 64.1, 0.5),
            facing: Direction::East,
            vertical_speed: 0.0,
        },
        &ContactFilter::default(),
    );
    assert!(launch.is_none());

    // The same plate launches via the direct-interaction path.
    let plate = f.material("light_plate");
    let launch = plate_contact(&f.registry, &f.rules, &pos(0, 64, 0), plate, Direction::East);
    assert!(launch.is_some());
}

#[test]
fn fast_falling_contact_is_filtered_out() {
    let mut f = fixture("filter");
    f.set_block(pos(0, 63, 0), "slime_pad");
    let movement = MovementSample {
        world: world(),
        from: Vec3::new(-1.5, 64.0, 0.5),
        to: Vec3::new(0.5, 64.0, 0.5),
        facing: Direction::East,
        vertical_speed: -40.0,
    };
    let strict = ContactFilter {
        min_confidence: 0.5,
        speed_scale: 4.0,
    };
    assert!(f.movement(&movement, &strict).is_none());
    // The same contact at rest passes.
    let mut settled = movement.clone();
    settled.vertical_speed = 0.0;
    assert!(f.movement(&settled, &strict).is_some());
}

#[test]
fn destroyed_pad_over_plain_stone_no_longer_launches() {
    let mut f = fixture("destroyed-pad");
    f.set_block(pos(0, 63, 0), "stone");
    f.registry.register(PadEntry::new(pos(0, 63, 0)));
    f.registry.unregister(&pos(0, 63, 0));
    let launch = f.movement(
        &MovementSample {
            world: world(),
            from: Vec3::new(-1.5, 64.0, 0.5),
            to: Vec3::new(0.5, 64.0, 0.5),
            facing: Direction::East,
            vertical_speed: 0.0,
        },
        &ContactFilter::default(),
    );
    assert!(launch.is_none());
}
