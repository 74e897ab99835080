use roadgrid_core::{Coord, MapText, Terrain, TerrainGrid};
use roadgrid_paths::{PathEngine, PathError, Search, SearchOptions, shortest_path};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

fn route(grid: &TerrainGrid, from: Coord, to: Coord) -> Vec<Coord> {
    shortest_path(grid, from, to)
        .unwrap()
        .into_route()
        .expect("route")
        .into_cells()
}

#[test]
fn three_by_three_routes_through_road_centre() {
    let mut g = TerrainGrid::new(3, 3);
    g.set_state(c(1, 1), Terrain::Road).unwrap();
    let r = shortest_path(&g, c(0, 0), c(2, 2))
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(r.cells(), &[c(0, 0), c(1, 1), c(2, 2)]);
    // entering the open target still costs the open penalty
    assert_eq!(r.cost(), 10_000);

    g.set_state(c(2, 2), Terrain::Road).unwrap();
    let r = shortest_path(&g, c(0, 0), c(2, 2))
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(r.cells(), &[c(0, 0), c(1, 1), c(2, 2)]);
    assert_eq!(r.cost(), 2);
}

#[test]
fn one_by_one_grid() {
    let g = TerrainGrid::new(1, 1);
    let r = shortest_path(&g, c(0, 0), c(0, 0))
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(r.cells(), &[c(0, 0)]);
    assert_eq!(r.cost(), 0);
}

#[test]
fn two_by_two_diagonal_only() {
    let mut g = TerrainGrid::new(2, 2);
    g.set_state(c(0, 1), Terrain::Blocked).unwrap();
    g.set_state(c(1, 0), Terrain::Blocked).unwrap();
    let r = shortest_path(&g, c(0, 0), c(1, 1))
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(r.cells(), &[c(0, 0), c(1, 1)]);
    assert_eq!(r.cost(), 9999);
}

#[test]
fn walled_in_source_is_unreachable() {
    let m = MapText::parse(
        "\
.....
.###.
.#S#.
.###E",
    )
    .unwrap();
    let s = shortest_path(&m.grid, m.start.unwrap(), m.end.unwrap()).unwrap();
    assert_eq!(s, Search::Unreachable);
    assert!(s.route().is_none());
}

#[test]
fn source_equals_target_whatever_its_terrain() {
    for t in [Terrain::Open, Terrain::Road, Terrain::Blocked] {
        let mut g = TerrainGrid::new(3, 3);
        g.set_state(c(1, 1), t).unwrap();
        assert_eq!(route(&g, c(1, 1), c(1, 1)), vec![c(1, 1)]);
    }
}

#[test]
fn repeated_searches_are_identical() {
    let m = MapText::parse(
        "\
S.....=.......E
.====.=.=====..
.=..=.=.=...=..
.=..===.=...=..
.=......=====..
.==============",
    )
    .unwrap();
    let (s, e) = (m.start.unwrap(), m.end.unwrap());
    let first = shortest_path(&m.grid, s, e).unwrap();
    for _ in 0..10 {
        assert_eq!(shortest_path(&m.grid, s, e).unwrap(), first);
    }
    let fast = PathEngine::new(SearchOptions {
        early_exit: true,
        ..Default::default()
    })
    .shortest_path(&m.grid, s, e)
    .unwrap();
    assert_eq!(fast, first);
}

#[test]
fn town_map_follows_the_road() {
    let m = MapText::parse(
        "\
S=====.
######=
E=====.",
    )
    .unwrap();
    let r = shortest_path(&m.grid, m.start.unwrap(), m.end.unwrap())
        .unwrap()
        .into_route()
        .unwrap();
    assert_eq!(
        r.cells(),
        &[
            c(0, 0),
            c(0, 1),
            c(0, 2),
            c(0, 3),
            c(0, 4),
            c(0, 5),
            c(1, 6),
            c(2, 5),
            c(2, 4),
            c(2, 3),
            c(2, 2),
            c(2, 1),
            c(2, 0),
        ]
    );
    // eleven road steps, one open step onto the end marker
    assert_eq!(r.cost(), 11 + 9999);
}

#[test]
fn reclassifying_between_searches_changes_the_route() {
    let mut g = TerrainGrid::new(1, 4);
    g.fill(Terrain::Road);
    assert_eq!(route(&g, c(0, 0), c(0, 3)).len(), 4);

    g.set_state(c(0, 2), Terrain::Blocked).unwrap();
    assert_eq!(shortest_path(&g, c(0, 0), c(0, 3)).unwrap(), Search::Unreachable);
}

#[test]
fn out_of_range_is_an_error_not_a_result() {
    let g = TerrainGrid::default();
    let err = shortest_path(&g, c(0, 0), c(6, 0)).unwrap_err();
    assert!(matches!(err, PathError::OutOfRange(_)));
    assert_eq!(
        err.to_string(),
        "coordinate (6, 0) is outside the 6x15 grid"
    );
}

#[test]
fn independent_snapshots_search_in_parallel() {
    let mut g = TerrainGrid::default();
    for col in 0..15 {
        g.set_state(c(3, col), Terrain::Road).unwrap();
    }
    let expected = shortest_path(&g, c(3, 0), c(3, 14)).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let snapshot = g.clone();
            std::thread::spawn(move || shortest_path(&snapshot, c(3, 0), c(3, 14)).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    assert_eq!(expected.route().unwrap().cost(), 14);
}
