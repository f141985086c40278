use caption::{
    load_file, render, CalendarConfig, CrewMember, CrewRole, Orbit, OverlayConfig, Renderer,
    Situation, Snapshot, Vessel,
};
use std::io::Write;

const DAY: f64 = 21_600.0;

fn mun_orbiter() -> Snapshot {
    Snapshot::at(349.0 * DAY + 5.0 * 3600.0 + 3.0 * 60.0 + 1.0).with_vessel(Vessel {
        name: "Kestrel II".into(),
        body: "Mun".into(),
        situation: Situation::Orbiting,
        altitude: 14_560.0,
        mission_time: 2.0 * DAY + 62.0,
        orbit: Some(Orbit {
            apoapsis: 15_000.0,
            periapsis: 14_100.0,
            period: 2_400.0,
            ..Orbit::default()
        }),
        crew: vec![
            CrewMember::new("Valentina Kerman", CrewRole::Pilot),
            CrewMember::new("Bob Kerman", CrewRole::Scientist),
        ],
        ..Vessel::default()
    })
}

#[test]
fn full_caption() {
    let overlay = OverlayConfig::new(
        "<Vessel> | <Situation> <Body> at <Altitude><N>\
         <Date(ddd d MMMM, yyy)> <T+><N>\
         <Orbit> / <Period><N>\
         <Crew(short)> <Custom>",
    )
    .with_custom_text("#<Pilots(short)>");
    let renderer = Renderer::new(CalendarConfig::default(), overlay);

    assert_eq!(
        renderer.render(&mun_orbiter()),
        "Kestrel II | Orbiting Mun at 14.6 km\n\
         Bol 31 Nebula, 001 T+ 2d, 0:01:02\n\
         15.0 km x 14.1 km / 0:40:00\n\
         Valentina, Bob #Valentina"
    );
}

#[test]
fn failures_and_unknown_tags_stay_local() {
    let text = render(
        "<Target> <Vessel> <Frobnicate(1,2)> <Biome",
        &mun_orbiter(),
        &CalendarConfig::default(),
        &OverlayConfig::default(),
    );
    assert_eq!(text, "Error expanding <Target> Kestrel II <Frobnicate(1,2)> <Biome");
}

#[test]
fn renders_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let snapshot_path = dir.path().join("snapshot.json");
    let mut file = std::fs::File::create(&snapshot_path).unwrap();
    write!(
        file,
        r#"{{"ut": 0.0, "vessel": {{"name": "Flea", "body": "Kerbin", "situation": "prelaunch"}}}}"#
    )
    .unwrap();

    let calendar_path = dir.path().join("calendar.yaml");
    std::fs::write(
        &calendar_path,
        "months: [Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec]\n\
         days: [Mon, Tue, Wed, Thu, Fri, Sat]\n\
         base_year: 1950\n",
    )
    .unwrap();

    let overlay_path = dir.path().join("overlay.yml");
    std::fs::write(&overlay_path, "template: \"<Vessel>, <Date>\"\ndate_format: MMM yyyy\n")
        .unwrap();

    let snapshot: Snapshot = load_file(&snapshot_path).unwrap();
    let calendar: CalendarConfig = load_file(&calendar_path).unwrap();
    let overlay = OverlayConfig::from_file(&overlay_path).unwrap();

    let renderer = Renderer::new(calendar, overlay);
    assert_eq!(renderer.render(&snapshot), "Flea, Jan 1951");
}
