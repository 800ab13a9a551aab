/// Integration test for arm configuration files
use anyhow::Result;
use rasw::{config::Config, export::write_frames};
use rasw_core::{Coord, ElbowBranch, Trajectory};
use std::{fs, io::Write};

#[test]
fn test_toml_config_drives_a_solution() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("arm.toml");
    fs::write(
        &path,
        r#"
[arm]
links = [10.0, 10.0]

[ik]
branch = "up"
"#,
    )?;

    let config = Config::from_file(&path)?;
    config.validate()?;
    assert_eq!(config.ik.branch, ElbowBranch::Up);

    let arm = config.arm()?;
    let target = Coord::new(12.0, 5.0);
    let pose = arm.solve(target, &config.ik_options())?;
    // the up branch bends the elbow clockwise
    assert!(pose.angles()[1] < 0.0);
    assert!(arm.end_effector(&pose)?.distance(&target) < 1e-9);
    Ok(())
}

#[test]
fn test_extensionless_file_falls_back_to_json() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{ "arm": {{ "links": [160.0, 160.0, 160.0, 160.0], "rest": [0.0, 0.0, 0.0, 0.0] }} }}"#
    )?;

    let config = Config::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.arm()?.reach(), 640.0);
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}

#[test]
fn test_three_link_animation_ends_on_target() -> Result<()> {
    let config = Config::default();
    let arm = config.arm()?;
    let target = Coord::new(400.0, 200.0);
    let pose = arm.solve(target, &config.ik_options())?;

    let trajectory = Trajectory::new(arm.links(), config.rest_pose(), pose)?
        .with_frames(config.animation.frames)
        .with_hold(config.animation.hold);

    let last = trajectory.frames().last().expect("frames");
    assert!(last.end_effector().distance(&target) < 1e-9);

    let mut out = Vec::new();
    let count = write_frames(&mut out, trajectory.frames(), Some(2))?;
    assert_eq!(count, 70);
    let text = String::from_utf8(out)?;
    assert!(
        text.lines()
            .last()
            .is_some_and(|line| line.ends_with("[400.0,200.0]]}"))
    );
    Ok(())
}

#[test]
fn test_demo_configs_are_valid() -> Result<()> {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    for name in ["three_link.toml", "four_link.toml", "two_link.json"] {
        let config = Config::from_file(demos.join(name))?;
        config.validate()?;
    }
    Ok(())
}
