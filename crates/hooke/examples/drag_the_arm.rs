//! Drives the single-spring scene the way a presentation layer would:
//! subscribe to the observable properties, push slider/drag inputs, print
//! what comes back.
//!
//! Run with `RUST_LOG=hooke=trace` to see the model's own tracing output.

use hooke::{SingleSpringSystem, SpringConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut system = SingleSpringSystem::new(SpringConfig::single());

    let _x_sub = system.spring().observe_displacement(|old, new| {
        println!("displacement {old:+.3} m -> {new:+.3} m");
    });
    let _f_sub = system.spring().observe_applied_force(|old, new| {
        println!("applied force {old:+.1} N -> {new:+.1} N");
    });

    println!("-- applied force slider --");
    for force in [10.0, 25.0, 50.0, 100.0] {
        system.set_applied_force(force);
    }

    println!("-- stiffer spring, force held --");
    system.set_spring_constant(800.0);

    println!("-- drag the arm to 5 cm past equilibrium --");
    system.drag_arm_to(system.spring().equilibrium_x() + 0.05);
    println!(
        "spring reports F = {:.1} N, restoring force {:+.1} N",
        system.spring().applied_force(),
        system.spring().spring_force()
    );
}
