//! Unit tests for the shape resolver.

use glam::IVec3;
use hashbrown::HashMap;
use rstest::{fixture, rstest};

use super::*;
use crate::world::{Facing, Half};

const STONE: u32 = 1;
const STAIRS: u32 = 53;
const FENCE: u32 = 85;
const GATE: u32 = 107;
const WALL: u32 = 139;
const PANE: u32 = 102;
const SNOW: u32 = 78;

#[derive(Default)]
struct MapWorld(HashMap<IVec3, CellDescriptor>);

impl WorldPort for MapWorld {
    fn get_cell(&self, position: IVec3) -> Option<CellDescriptor> {
        self.0.get(&position).cloned()
    }
}

impl MapWorld {
    fn put(&mut self, position: IVec3, id: u32, props: &[(&str, &str)]) {
        let cell = CellDescriptor {
            id,
            default_shape: Some(vec![Aabb::UNIT]),
            boundary_kind: BoundaryKind::Solid,
            properties: props
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        };
        self.0.insert(position, cell);
    }
}

#[fixture]
fn kinds() -> CellKindTable {
    CellKindTable::from_names([
        (STONE, "stone"),
        (STAIRS, "oak_stairs"),
        (FENCE, "fence"),
        (GATE, "fence_gate"),
        (WALL, "cobblestone_wall"),
        (PANE, "glass_pane"),
        (SNOW, "snow_layer"),
    ])
}

fn mirror(boxes: &[Aabb], facing: Facing) -> Vec<Aabb> {
    boxes
        .iter()
        .map(|b| match facing {
            Facing::North | Facing::South => {
                Aabb::new(1.0 - b.max.x, b.min.y, b.min.z, 1.0 - b.min.x, b.max.y, b.max.z)
            }
            Facing::East | Facing::West => {
                Aabb::new(b.min.x, b.min.y, 1.0 - b.max.z, b.max.x, b.max.y, 1.0 - b.min.z)
            }
        })
        .collect()
}

fn rotate(boxes: &[Aabb]) -> Vec<Aabb> {
    boxes
        .iter()
        .map(|b| Aabb::new(1.0 - b.max.z, b.min.y, b.min.x, 1.0 - b.min.z, b.max.y, b.max.x))
        .collect()
}

#[rstest]
fn stair_tables_are_mirror_symmetric(
    #[values(Facing::North, Facing::East, Facing::South, Facing::West)] facing: Facing,
    #[values(Half::Bottom, Half::Top)] half: Half,
) {
    for shape in StairShape::ALL {
        assert_eq!(
            mirror(&stair_boxes(shape, facing, half), facing),
            stair_boxes(shape.mirrored(), facing, half),
            "{shape:?} facing {facing:?}"
        );
    }
}

#[rstest]
fn stair_tables_rotate_with_facing(
    #[values(Facing::North, Facing::East, Facing::South, Facing::West)] facing: Facing,
    #[values(Half::Bottom, Half::Top)] half: Half,
) {
    for shape in StairShape::ALL {
        assert_eq!(
            rotate(&stair_boxes(shape, facing, half)),
            stair_boxes(shape, facing.clockwise(), half),
        );
    }
}

#[test]
fn bottom_stair_facing_north_has_step_at_north() {
    let boxes = stair_boxes(StairShape::Straight, Facing::North, Half::Bottom);
    assert_eq!(
        boxes,
        vec![
            Aabb::new(0.0, 0.0, 0.0, 1.0, 0.5, 1.0),
            Aabb::new(0.0, 0.5, 0.0, 1.0, 1.0, 0.5),
        ]
    );
}

#[rstest]
#[case::lone(None, None, StairShape::Straight)]
#[case::parallel_ahead(Some(Facing::North), None, StairShape::Straight)]
#[case::outer_left(Some(Facing::West), None, StairShape::OuterLeft)]
#[case::outer_right(Some(Facing::East), None, StairShape::OuterRight)]
#[case::inner_left(None, Some(Facing::West), StairShape::InnerLeft)]
#[case::inner_right(None, Some(Facing::East), StairShape::InnerRight)]
#[case::outer_wins(Some(Facing::East), Some(Facing::West), StairShape::OuterRight)]
fn stair_classification(
    #[case] ahead: Option<Facing>,
    #[case] behind: Option<Facing>,
    #[case] expected: StairShape,
) {
    assert_eq!(StairShape::classify(Facing::North, ahead, behind), expected);
}

#[rstest]
fn resolver_reads_stair_neighbours(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, STAIRS, &[("facing", "north"), ("half", "bottom")]);
    world.put(IVec3::new(0, 0, -1), STAIRS, &[("facing", "west"), ("half", "bottom")]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("stair");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    assert_eq!(
        shape.boxes,
        stair_boxes(StairShape::OuterLeft, Facing::North, Half::Bottom)
    );
}

#[rstest]
fn stair_ahead_of_other_half_is_ignored(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, STAIRS, &[("facing", "north"), ("half", "bottom")]);
    world.put(IVec3::new(0, 0, -1), STAIRS, &[("facing", "west"), ("half", "top")]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("stair");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    assert_eq!(
        shape.boxes,
        stair_boxes(StairShape::Straight, Facing::North, Half::Bottom)
    );
}

#[rstest]
fn fence_connects_to_gate_but_not_stone(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, FENCE, &[]);
    world.put(IVec3::new(1, 0, 0), GATE, &[]);
    world.put(IVec3::new(-1, 0, 0), STONE, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("fence");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    assert_eq!(
        shape.boxes,
        vec![
            Aabb::new(0.375, 0.0, 0.375, 0.625, 1.5, 0.625),
            Aabb::new(0.625, 0.0, 0.375, 1.0, 1.5, 0.625),
        ]
    );
}

#[rstest]
fn wall_joins_neighbouring_wall(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, WALL, &[]);
    world.put(IVec3::new(0, 0, 1), WALL, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("wall");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    assert_eq!(shape.boxes, vec![Aabb::new(0.25, 0.0, 0.25, 0.75, 1.5, 1.0)]);
}

#[rstest]
fn pane_leans_towards_single_solid_neighbour(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, PANE, &[]);
    world.put(IVec3::new(0, 0, -1), STONE, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("pane");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    assert_eq!(
        shape.boxes,
        vec![
            Aabb::new(0.0, 0.0, 0.4375, 1.0, 1.0, 0.5625),
            Aabb::new(0.4375, 0.0, 0.0, 0.5625, 1.0, 0.5),
        ]
    );
}

#[rstest]
#[case::full_stack("8", "8", true)]
#[case::partial_above("8", "3", false)]
#[case::partial_below("7", "8", false)]
fn snow_merges_only_full_stacks(
    kinds: CellKindTable,
    #[case] below: &str,
    #[case] above: &str,
    #[case] merged: bool,
) {
    let layer = Aabb::new(0.0, 0.0, 0.0, 1.0, 0.875, 1.0);
    let mut world = MapWorld::default();
    world.put(IVec3::ZERO, SNOW, &[("layers", below)]);
    world.put(IVec3::Y, SNOW, &[("layers", above)]);
    world.0.get_mut(&IVec3::ZERO).expect("snow").default_shape = Some(vec![layer]);
    let resolver = ShapeResolver::new(&kinds);
    let cell = world.get_cell(IVec3::ZERO).expect("snow");
    let shape = resolver.resolve(&world, IVec3::ZERO, &cell);
    let expected = if merged { Aabb::UNIT } else { layer };
    assert_eq!(shape.boxes, vec![expected]);
}

#[rstest]
fn missing_shape_on_solid_cell_is_a_unit_cube(kinds: CellKindTable) {
    let cell = CellDescriptor {
        id: STONE,
        default_shape: None,
        boundary_kind: BoundaryKind::Solid,
        ..CellDescriptor::default()
    };
    let resolver = ShapeResolver::new(&kinds);
    let shape = resolver.resolve(&MapWorld::default(), IVec3::ZERO, &cell);
    assert_eq!(shape.boxes, vec![Aabb::UNIT]);
}

#[rstest]
fn missing_shape_on_empty_cell_has_no_boxes(kinds: CellKindTable) {
    let cell = CellDescriptor::default();
    let resolver = ShapeResolver::new(&kinds);
    let shape = resolver.resolve(&MapWorld::default(), IVec3::ZERO, &cell);
    assert!(shape.boxes.is_empty());
}

#[rstest]
fn collision_boxes_include_tall_posts_below(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::new(0, 59, 0), FENCE, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let query = Aabb::new(0.2, 60.0, 0.2, 0.8, 61.8, 0.8);
    let boxes = resolver.collision_boxes(&world, &query);
    assert_eq!(boxes, vec![Aabb::new(0.375, 59.0, 0.375, 0.625, 60.5, 0.625)]);
}

#[rstest]
fn collision_boxes_skip_touching_faces(kinds: CellKindTable) {
    let mut world = MapWorld::default();
    world.put(IVec3::new(0, 59, 0), STONE, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let query = Aabb::new(0.2, 60.0, 0.2, 0.8, 61.8, 0.8);
    assert!(resolver.collision_boxes(&world, &query).is_empty());
    assert!(resolver.any_collision(&world, &query.offset(0.0, -0.1, 0.0)));
}

#[rstest]
fn cells_at_the_index_bounds_resolve(kinds: CellKindTable) {
    let corner = IVec3::new(i32::MAX, i32::MIN, 0);
    let mut world = MapWorld::default();
    world.put(corner, FENCE, &[]);
    let resolver = ShapeResolver::new(&kinds);
    let x = f64::from(i32::MAX);
    let y = f64::from(i32::MIN);
    let query = Aabb::new(x + 0.2, y, 0.2, x + 0.8, y + 1.8, 0.8);
    assert!(!resolver.collision_boxes(&world, &query).is_empty());
}
