use wumpus_core::{Cell, Heading};
use wumpus_space::Grid;

#[test]
fn neighbour_degree_by_position_on_4x4() {
    let g = Grid::square(4).unwrap();
    let degrees: Vec<usize> = g.cells().map(|c| g.neighbours(c).len()).collect();
    // Corners 2, edges 3, interior 4.
    assert_eq!(degrees.iter().filter(|&&d| d == 2).count(), 4);
    assert_eq!(degrees.iter().filter(|&&d| d == 3).count(), 8);
    assert_eq!(degrees.iter().filter(|&&d| d == 4).count(), 4);
}

#[test]
fn thin_grids_have_line_topology() {
    let row = Grid::new(1, 5).unwrap();
    assert_eq!(row.neighbours(Cell::new(0, 0)).len(), 1);
    assert_eq!(row.neighbours(Cell::new(0, 2)).len(), 2);
    assert_eq!(row.forward(Cell::new(0, 2), Heading::Up), None);

    let col = Grid::new(5, 1).unwrap();
    assert_eq!(col.neighbours(Cell::new(4, 0)).as_slice(), &[Cell::new(3, 0)]);
}

#[test]
fn walking_a_ray_stays_in_bounds() {
    let g = Grid::new(3, 6).unwrap();
    for cell in g.cells() {
        for h in Heading::ALL {
            for ahead in g.ray(cell, h) {
                assert!(g.contains(ahead));
                assert_eq!(Heading::toward(cell, ahead), Some(h));
            }
        }
    }
}
