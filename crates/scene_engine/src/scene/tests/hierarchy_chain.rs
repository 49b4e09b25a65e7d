//! Deep-chain composition tests
//!
//! Validates quaternion and matrix propagation across a three-level
//! hierarchy, including re-propagation after mutating the root.

use crate::foundation::math::constants::PI;
use crate::foundation::math::{Quat, Vec3};
use crate::scene::SceneGraph;
use approx::assert_relative_eq;

const EPSILON: f32 = 1e-5;

#[test]
fn test_three_level_orientation_is_ancestor_to_descendant_product() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node(None).unwrap();
    let b = graph.create_node(Some(a)).unwrap();
    let c = graph.create_node(Some(b)).unwrap();

    graph
        .node_mut(a)
        .unwrap()
        .local_mut()
        .set_rotation(0.4, Vec3::new(0.0, 1.0, 0.0));
    graph
        .node_mut(b)
        .unwrap()
        .local_mut()
        .set_rotation(0.7, Vec3::new(1.0, 0.0, 0.0));
    graph
        .node_mut(c)
        .unwrap()
        .local_mut()
        .set_rotation(-0.2, Vec3::new(0.0, 0.0, 1.0));

    graph.update(a);

    let expected = graph.node(a).unwrap().local().rotation
        * graph.node(b).unwrap().local().rotation
        * graph.node(c).unwrap().local().rotation;
    assert_relative_eq!(
        graph.node(c).unwrap().world_orientation(),
        expected,
        epsilon = EPSILON
    );
}

#[test]
fn test_three_level_matrix_is_left_to_right_composition() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node(None).unwrap();
    let b = graph.create_node(Some(a)).unwrap();
    let c = graph.create_node(Some(b)).unwrap();

    {
        let local = graph.node_mut(a).unwrap().local_mut();
        local.set_translation(Vec3::new(1.0, 0.0, 0.0));
        local.set_rotation(0.9, Vec3::new(0.0, 1.0, 0.0));
    }
    {
        let local = graph.node_mut(b).unwrap().local_mut();
        local.set_translation(Vec3::new(0.0, 2.0, 0.0));
        local.set_rotation(0.3, Vec3::new(1.0, 0.0, 0.0));
    }
    graph
        .node_mut(c)
        .unwrap()
        .local_mut()
        .set_translation(Vec3::new(0.0, 0.0, 3.0));

    graph.update(a);

    let expected = graph.node(a).unwrap().world_matrix()
        * graph.node(b).unwrap().local_matrix()
        * graph.node(c).unwrap().local_matrix();
    assert_relative_eq!(
        graph.node(c).unwrap().world_matrix(),
        expected,
        epsilon = EPSILON
    );
}

#[test]
fn test_root_mutation_repropagates_to_leaf() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node(None).unwrap();
    let b = graph.create_node(Some(a)).unwrap();
    let c = graph.create_node(Some(b)).unwrap();

    graph
        .node_mut(b)
        .unwrap()
        .local_mut()
        .set_rotation(0.5, Vec3::new(0.0, 1.0, 0.0));
    graph
        .node_mut(c)
        .unwrap()
        .local_mut()
        .set_rotation(0.25, Vec3::new(0.0, 1.0, 0.0));
    graph.update(a);

    let before = graph.node(c).unwrap().world_orientation();

    // Rotating the root must flow all the way down on the next pass.
    graph
        .node_mut(a)
        .unwrap()
        .local_mut()
        .set_rotation(PI / 2.0, Vec3::new(0.0, 1.0, 0.0));
    graph.update(a);

    let after = graph.node(c).unwrap().world_orientation();
    let expected = Quat::from_axis_angle(&Vec3::y_axis(), PI / 2.0) * before;
    assert_relative_eq!(after, expected, epsilon = EPSILON);
}
