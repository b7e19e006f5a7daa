//! Builds a foot along a three-element wall strip and prints the result.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's tracing output.

use shellfoot::math::Point3;
use shellfoot::model::{
    Connectivity, ElementData, MeshModel, PartData, PartDefinition, SectionData,
};
use shellfoot::operations::MakeFoot;

fn main() -> shellfoot::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut model = MeshModel::new();
    let section = model.add_section(SectionData::new(10.0));
    let wall = model.add_part(PartData::new(PartDefinition::Homogeneous(section)));
    let foot = model.add_part(PartData::new(PartDefinition::Homogeneous(section)));

    // Three unit quads in the z = 0 plane; the foot edge runs along y = 0.
    let bottom: Vec<_> = (0..=3)
        .map(|i| model.add_node(Point3::new(f64::from(i), 0.0, 0.0)))
        .collect();
    let top: Vec<_> = (0..=3)
        .map(|i| model.add_node(Point3::new(f64::from(i), 1.0, 0.0)))
        .collect();
    let boundary: Vec<_> = (0..3)
        .map(|i| {
            model.add_element(ElementData::new(
                wall,
                Connectivity::Quad([bottom[i], bottom[i + 1], top[i + 1], top[i]]),
            ))
        })
        .collect();

    let report = MakeFoot::new(boundary, vec![bottom[0], bottom[1]], Some(2.5), foot)
        .execute(&mut model)?;

    println!(
        "foot layers: {} x {:.3} across thickness 10",
        report.foot_num, report.foot_width
    );
    println!("new elements: {}", report.new_elements.len());
    println!("rigid couplings: {}", report.rigid_bodies.len());
    println!(
        "merged {} duplicate node(s) at tolerance {:.3}",
        report.merged_nodes, report.merge_tolerance
    );
    Ok(())
}
