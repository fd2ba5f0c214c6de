//! A* planner implementation.

use crate::core::{GridCoord, Obstacle, Rect, WorldPoint};
use crate::pathfinding::smoothing::{manhattan_length, optimize_path};
use crate::query::TraversabilityChecker;
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};

use super::types::{AStarConfig, PathFailure, PathResult, SearchNode};

/// A* pathfinder over a layout snapshot.
///
/// Works on an implicit 4-connected grid; cells are classified lazily by
/// testing their center against the obstacles inflated by the clearance.
pub struct AStarPlanner<'a> {
    obstacles: &'a [Obstacle],
    config: AStarConfig,
}

impl<'a> AStarPlanner<'a> {
    /// Create a new A* planner
    pub fn new(obstacles: &'a [Obstacle], config: AStarConfig) -> Self {
        Self { obstacles, config }
    }

    /// Create with default configuration
    pub fn with_defaults(obstacles: &'a [Obstacle]) -> Self {
        Self::new(obstacles, AStarConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// Find a path from start to end (world coordinates)
    pub fn find_path(&self, start: WorldPoint, end: WorldPoint) -> PathResult {
        self.search(start, end, None)
    }

    /// Find a path, polling `cancel` between expansions.
    ///
    /// Runs that are never cancelled return exactly what
    /// [`find_path`](Self::find_path) returns.
    pub fn find_path_cancellable(
        &self,
        start: WorldPoint,
        end: WorldPoint,
        cancel: &AtomicBool,
    ) -> PathResult {
        self.search(start, end, Some(cancel))
    }

    fn search(&self, start: WorldPoint, end: WorldPoint, cancel: Option<&AtomicBool>) -> PathResult {
        if !start.is_finite() || !end.is_finite() {
            debug!("[AStar] FAILED: MissingEndpoints - non-finite start or end");
            return PathResult::failed(PathFailure::MissingEndpoints, 0);
        }

        let resolution = self.config.resolution;
        if !(resolution.is_finite() && resolution > 0.0) {
            debug!("[AStar] FAILED: InvalidResolution {}", resolution);
            return PathResult::failed(PathFailure::InvalidResolution, 0);
        }
        let (Some(start_cell), Some(goal_cell)) = (
            GridCoord::try_from_world(start, resolution),
            GridCoord::try_from_world(end, resolution),
        ) else {
            debug!(
                "[AStar] FAILED: OutOfRange start=({},{}) end=({},{})",
                start.x, start.y, end.x, end.y
            );
            return PathResult::failed(PathFailure::OutOfRange, 0);
        };
        let start_world = start_cell.to_world(resolution);
        let goal_world = goal_cell.to_world(resolution);

        trace!(
            "[AStar] find_path: start=({:.2},{:.2}) goal=({:.2},{:.2}) obstacles={}",
            start_world.x,
            start_world.y,
            goal_world.x,
            goal_world.y,
            self.obstacles.len()
        );

        let checker = TraversabilityChecker::new(self.obstacles, self.config.clearance);

        if let Some(blocker) = checker.blocking_obstacle(start_world) {
            debug!(
                "[AStar] FAILED: StartBlocked at ({:.2},{:.2}) by '{}'",
                start_world.x, start_world.y, blocker.id
            );
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if let Some(blocker) = checker.blocking_obstacle(goal_world) {
            debug!(
                "[AStar] FAILED: EndBlocked at ({:.2},{:.2}) by '{}'",
                goal_world.x, goal_world.y, blocker.id
            );
            return PathResult::failed(PathFailure::EndBlocked, 0);
        }

        let bounds = self.search_bounds(&checker, start_world, goal_world);

        // A* search
        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, u32> = HashMap::new();
        // Each cell is tested against the obstacles at most once
        let mut traversable: HashMap<GridCoord, bool> = HashMap::new();
        let mut sequence: u64 = 0;

        open_set.push(SearchNode {
            coord: start_cell,
            g_cost: 0,
            f_cost: heuristic(start_cell, goal_cell),
            sequence,
        });
        g_scores.insert(start_cell, 0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Superseded entry for an already expanded cell
            if closed_set.contains(&current.coord) {
                continue;
            }

            if self.is_goal(current.coord, goal_world) {
                return self.reconstruct_path(&came_from, current.coord, nodes_expanded);
            }

            if nodes_expanded >= self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(
                    PathFailure::MaxIterationsExceeded {
                        limit: self.config.max_iterations,
                    },
                    nodes_expanded,
                );
            }

            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!("[AStar] FAILED: Cancelled after {} nodes", nodes_expanded);
                return PathResult::failed(PathFailure::Cancelled, nodes_expanded);
            }

            closed_set.insert(current.coord);
            nodes_expanded += 1;

            for neighbor in current.coord.neighbors_4() {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let is_free = *traversable.entry(neighbor).or_insert_with(|| {
                    let world = neighbor.to_world(resolution);
                    bounds.contains(world) && checker.is_position_safe(world)
                });
                if !is_free {
                    continue;
                }

                let tentative_g = current.g_cost + 1;
                let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < known_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);

                    sequence += 1;
                    open_set.push(SearchNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g.saturating_add(heuristic(neighbor, goal_cell)),
                        sequence,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Within half a cell of the goal on both axes.
    fn is_goal(&self, coord: GridCoord, goal: WorldPoint) -> bool {
        let world = coord.to_world(self.config.resolution);
        let half = self.config.resolution * 0.5;
        (world.x - goal.x).abs() < half && (world.y - goal.y).abs() < half
    }

    /// Region the search may expand into.
    ///
    /// Outside the inflated obstacles everything is free, so a shortest path
    /// never needs more than one cell beyond their bounding box. Bounding the
    /// plane lets an enclosed goal exhaust the open set instead of running
    /// into the iteration limit.
    fn search_bounds(
        &self,
        checker: &TraversabilityChecker<'_>,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Rect {
        let endpoints = Rect::new(start.x, start.y, 0.0, 0.0).expanded_to_include(goal);
        let region = match checker.inflated_bounds() {
            Some(obstacles) => endpoints.union(&obstacles),
            None => endpoints,
        };
        region.inflated(self.config.search_padding.max(self.config.resolution))
    }

    /// Walk `came_from` back from the goal and package the result.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCoord, GridCoord>,
        goal: GridCoord,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path_grid = Vec::new();
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            path_grid.push(current);
            current = prev;
        }
        path_grid.push(current); // Add start
        path_grid.reverse();

        let mut path_world: Vec<WorldPoint> = path_grid
            .iter()
            .map(|c| c.to_world(self.config.resolution))
            .collect();
        // Start and end share a cell: still report both endpoints
        if path_world.len() == 1 {
            path_world.push(path_world[0]);
        }

        let distance = manhattan_length(&path_world);
        let waypoints = optimize_path(&path_world);

        trace!(
            "[AStar] SUCCESS: path length={} cells, {} waypoints, distance={:.2}m, nodes_expanded={}",
            path_grid.len(),
            waypoints.len(),
            distance,
            nodes_expanded
        );

        PathResult::found(waypoints, path_grid, distance, nodes_expanded)
    }
}

/// Manhattan distance in grid steps (admissible for 4-connected moves)
#[inline]
fn heuristic(from: GridCoord, to: GridCoord) -> u32 {
    from.manhattan_distance(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn planner(obstacles: &[Obstacle]) -> AStarPlanner<'_> {
        AStarPlanner::with_defaults(obstacles)
    }

    #[test]
    fn test_straight_line_open_floor() {
        let result = planner(&[]).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(4.0, 0.0));

        assert!(result.success);
        assert_eq!(result.path_grid.len(), 11);
        assert_eq!(result.waypoints.len(), 2);
        assert_relative_eq!(result.distance, 4.0, epsilon = 1e-4);
        assert_eq!(result.failure_reason, None);
    }

    #[test]
    fn test_l_shaped_route_has_one_corner() {
        let result = planner(&[]).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(2.0, 2.0));

        assert!(result.success);
        assert_relative_eq!(result.distance, 4.0, epsilon = 1e-4);
        // Tie-breaking yields a staircase or an L; either way endpoints survive
        assert_eq!(result.waypoints[0], WorldPoint::new(0.0, 0.0));
        assert_relative_eq!(result.waypoints.last().unwrap().x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(result.waypoints.last().unwrap().y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_endpoints_are_snapped() {
        let result = planner(&[]).find_path(WorldPoint::new(0.13, -0.1), WorldPoint::new(2.1, 0.05));

        assert!(result.success);
        assert_eq!(result.waypoints[0], WorldPoint::new(0.0, 0.0));
        let last = *result.waypoints.last().unwrap();
        assert_relative_eq!(last.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_same_cell() {
        let result = planner(&[]).find_path(WorldPoint::new(1.2, 1.2), WorldPoint::new(1.25, 1.15));

        assert!(result.success);
        assert_eq!(result.waypoints.len(), 2);
        assert_eq!(result.waypoints[0], result.waypoints[1]);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.nodes_expanded, 0);
    }

    #[test]
    fn test_start_blocked() {
        let layout = vec![Obstacle::new("b", -1.0, -1.0, 2.0, 2.0)];
        let result = planner(&layout).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(5.0, 0.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
        assert_eq!(result.nodes_expanded, 0);
        assert!(result.waypoints.is_empty());
    }

    #[test]
    fn test_end_blocked_by_clearance_only() {
        // End sits 5cm outside the block: inside the 10cm clearance
        let layout = vec![Obstacle::new("b", 4.05, -1.0, 2.0, 2.0)];
        let result = planner(&layout).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(4.0, 0.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::EndBlocked));
    }

    #[test]
    fn test_detour_around_block() {
        // Block straddles the straight route
        let layout = vec![Obstacle::new("b", 2.0, -1.0, 2.0, 2.0)];
        let result = planner(&layout).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(6.0, 0.0));

        assert!(result.success);
        assert!(result.distance > 6.0);
        assert!(result.waypoints.len() > 2);

        let inflated = layout[0].rect.inflated(0.1);
        for coord in &result.path_grid {
            assert!(!inflated.contains(coord.to_world(0.4)));
        }
    }

    #[test]
    fn test_no_path_when_start_enclosed() {
        let layout = vec![
            Obstacle::new("top", -2.0, -2.0, 4.0, 0.5),
            Obstacle::new("bottom", -2.0, 1.5, 4.0, 0.5),
            Obstacle::new("left", -2.0, -2.0, 0.5, 4.0),
            Obstacle::new("right", 1.5, -2.0, 0.5, 4.0),
        ];
        let result = planner(&layout).find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(6.0, 0.0));

        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_iteration_limit() {
        let config = AStarConfig::default().with_max_iterations(5);
        let result = AStarPlanner::new(&[], config)
            .find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(8.0, 0.0));

        assert!(!result.success);
        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxIterationsExceeded { limit: 5 })
        );
        assert_eq!(result.nodes_expanded, 5);
    }

    #[test]
    fn test_cancelled() {
        let cancel = AtomicBool::new(true);
        let result = planner(&[]).find_path_cancellable(
            WorldPoint::new(0.0, 0.0),
            WorldPoint::new(4.0, 0.0),
            &cancel,
        );
        assert_eq!(result.failure_reason, Some(PathFailure::Cancelled));
    }

    #[test]
    fn test_uncancelled_run_matches_plain_run() {
        let layout = vec![Obstacle::new("b", 2.0, -1.0, 2.0, 2.0)];
        let start = WorldPoint::new(0.0, 0.0);
        let end = WorldPoint::new(6.0, 0.0);

        let plain = planner(&layout).find_path(start, end);
        let cancel = AtomicBool::new(false);
        let polled = planner(&layout).find_path_cancellable(start, end, &cancel);

        assert_eq!(plain.path_grid, polled.path_grid);
        assert_eq!(plain.waypoints, polled.waypoints);
        assert_eq!(plain.nodes_expanded, polled.nodes_expanded);
    }

    #[test]
    fn test_non_finite_endpoint() {
        let result = planner(&[]).find_path(WorldPoint::new(f32::NAN, 0.0), WorldPoint::ZERO);
        assert_eq!(result.failure_reason, Some(PathFailure::MissingEndpoints));
    }

    #[test]
    fn test_endpoints_beyond_grid_range() {
        let result =
            planner(&[]).find_path(WorldPoint::new(-1.0e9, 0.0), WorldPoint::new(1.0e9, 0.0));
        assert!(!result.success);
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfRange));
        assert_eq!(result.nodes_expanded, 0);

        let result = planner(&[]).find_path(WorldPoint::ZERO, WorldPoint::new(0.0, f32::MAX));
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfRange));
    }

    #[test]
    fn test_far_but_addressable_endpoints_hit_iteration_limit() {
        let config = AStarConfig::default().with_max_iterations(50);
        let result = AStarPlanner::new(&[], config)
            .find_path(WorldPoint::new(-1.0e8, 0.0), WorldPoint::new(1.0e8, 0.0));
        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxIterationsExceeded { limit: 50 })
        );
    }

    #[test]
    fn test_invalid_resolution() {
        for resolution in [0.0, -0.4, f32::NAN, f32::INFINITY] {
            let config = AStarConfig::with_resolution(resolution);
            let result = AStarPlanner::new(&[], config)
                .find_path(WorldPoint::ZERO, WorldPoint::new(2.0, 0.0));
            assert_eq!(
                result.failure_reason,
                Some(PathFailure::InvalidResolution),
                "resolution {}",
                resolution
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let layout = vec![
            Obstacle::new("a", 1.0, -2.0, 1.0, 3.0),
            Obstacle::new("b", 3.0, -1.0, 1.0, 3.0),
        ];
        let start = WorldPoint::new(0.0, 0.0);
        let end = WorldPoint::new(5.2, 0.4);

        let first = planner(&layout).find_path(start, end);
        for _ in 0..5 {
            let again = planner(&layout).find_path(start, end);
            assert_eq!(first.path_grid, again.path_grid);
        }
    }

    #[test]
    fn test_heuristic() {
        assert_eq!(heuristic(GridCoord::new(0, 0), GridCoord::new(3, -4)), 7);
        assert_eq!(heuristic(GridCoord::new(2, 2), GridCoord::new(2, 2)), 0);
    }
}
