use bezier_rope::{
    DisplayList, DrawCommand, FrameDriver, FrameStatus, InputMode, Preset, RopeConfig, Vector,
};

fn driver(preset: Preset) -> FrameDriver {
    FrameDriver::from_config(&RopeConfig::preset(preset), 1024.0, 768.0)
}

#[test]
fn identical_state_renders_identical_frames() {
    let mut a = driver(Preset::Vanilla);
    let mut b = driver(Preset::Vanilla);
    a.rope_mut().pointer_moved(123.0, 456.0);
    b.rope_mut().pointer_moved(123.0, 456.0);

    let mut first = DisplayList::new();
    let mut second = DisplayList::new();
    for _ in 0..30 {
        a.tick(&mut first).unwrap();
        b.tick(&mut second).unwrap();
        assert_eq!(first.commands(), second.commands());
    }
}

#[test]
fn settled_rope_redraws_the_same_frame() {
    let mut driver = driver(Preset::Vanilla);
    let mut surface = DisplayList::new();

    driver.tick(&mut surface).unwrap();
    let first = surface.commands().to_vec();
    driver.tick(&mut surface).unwrap();

    assert_eq!(surface.commands(), &first[..]);
}

#[test]
fn follow_mode_chases_pointer_and_mirror() {
    let mut driver = driver(Preset::Vanilla);
    driver.rope_mut().pointer_moved(200.0, 100.0);

    let mut surface = DisplayList::new();
    for _ in 0..2000 {
        assert_eq!(driver.tick(&mut surface).unwrap(), FrameStatus::Continue);
    }

    let handles = driver.rope().handles();
    assert!(handles[0].pos.distance(Vector::new(200.0, 100.0)) < 0.01);
    assert!(handles[1].pos.distance(Vector::new(824.0, 668.0)) < 0.01);
    assert_eq!(driver.frames(), 2000);
}

#[test]
fn endpoints_survive_many_frames() {
    let mut driver = driver(Preset::Component);
    let start = driver.rope().start();
    let end = driver.rope().end();
    assert_eq!(driver.rope().mode(), InputMode::Drag);

    let mut surface = DisplayList::new();
    driver.rope_mut().pointer_pressed(1024.0 * 0.3, 768.0 * 0.3);
    for i in 0..100 {
        driver.rope_mut().pointer_moved(i as f32, 700.0 - i as f32);
        driver.tick(&mut surface).unwrap();
    }

    assert_eq!(driver.rope().start(), start);
    assert_eq!(driver.rope().end(), end);
    let circles: Vec<_> = surface.filled_circles().map(|(center, _)| center).collect();
    assert_eq!(circles[0], start);
    assert_eq!(circles[1], end);
}

#[test]
fn stop_halts_the_loop_deterministically() {
    let mut driver = driver(Preset::Vanilla);
    let mut surface = DisplayList::new();
    driver.rope_mut().pointer_moved(0.0, 0.0);

    let mut ticks = 0;
    while driver.tick(&mut surface).unwrap() == FrameStatus::Continue {
        ticks += 1;
        if ticks == 10 {
            driver.stop();
        }
    }

    assert_eq!(ticks, 10);
    assert_eq!(driver.frames(), 10);
    assert!(!driver.is_running());

    let frozen = *driver.rope().handles();
    assert_eq!(driver.tick(&mut surface).unwrap(), FrameStatus::Halt);
    assert_eq!(*driver.rope().handles(), frozen);
}

#[test]
fn out_of_bounds_positions_are_still_drawn() {
    let mut driver = driver(Preset::Vanilla);
    driver.rope_mut().pointer_moved(-5000.0, 9000.0);
    let mut surface = DisplayList::new();
    for _ in 0..50 {
        driver.tick(&mut surface).unwrap();
    }
    assert!(matches!(surface.commands()[0], DrawCommand::Clear(_)));
    assert_eq!(surface.filled_circles().count(), 4);
    assert!(surface.polylines().flatten().all(|p| p.x.is_finite() && p.y.is_finite()));
}
