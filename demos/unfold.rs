//! Dodecahedron unfolding demo.
//!
//! Usage:
//! ```text
//! cargo run --example unfold                    # full net + angle sweep
//! RUST_LOG=dodeca_unfold=debug cargo run --example unfold
//! ```

use std::collections::VecDeque;

use dodeca_unfold::operations::query::{EdgePolicy, OpenEdges};
use dodeca_unfold::topology::EDGES_PER_FACE;
use dodeca_unfold::{
    attach_face, build_initial_net, snap_angle, FaceId, UnfoldConfig, UnfoldError,
};

fn main() -> Result<(), UnfoldError> {
    // Default: WARN for everything, INFO for the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=dodeca_unfold=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("dodeca_unfold=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = UnfoldConfig::default();
    dodeca_unfold::topology::validate()?;

    // Grow a net breadth-first until every face is placed.
    let mut net = build_initial_net(&config)?;
    let mut frontier = VecDeque::from([FaceId::ROOT]);
    while let Some(parent) = frontier.pop_front() {
        let open = OpenEdges::new(parent).execute(&net)?;
        for edge in (0..EDGES_PER_FACE).filter(|&e| open[e]) {
            if let Some(child) = attach_face(&mut net, parent, edge)? {
                println!(
                    "{parent} edge {edge} -> {} at ({:.1}, {:.1})",
                    child.face_id, child.center.x, child.center.y
                );
                frontier.push_back(child.face_id);
            }
        }
    }
    println!("net holds {} faces", net.len());

    let protected = OpenEdges::new(FaceId(1))
        .with_policy(EdgePolicy::ProtectRoot)
        .execute(&net)?;
    println!("face 1 edges not bordering the root: {protected:?}");

    // Sweep ray angles and report every geodesic the snapper finds.
    let mut last: Option<f64> = None;
    for k in -314..=314 {
        let free = f64::from(k) / 100.0;
        let snap = snap_angle(&config, free)?;
        if !snap.is_snapped || last.is_some_and(|a| (a - snap.angle).abs() < 1e-9) {
            continue;
        }
        last = Some(snap.angle);
        let end = snap.walk.point_at(snap.snap_distance);
        println!(
            "angle {:+.6} rad: {} faces, geodesic {:.4} R = {:.4} sides, ends near ({:.1}, {:.1})",
            snap.angle,
            snap.polygons().len(),
            snap.distance_in_radii(),
            snap.distance_in_side_lengths(),
            end.x,
            end.y
        );
    }
    Ok(())
}
