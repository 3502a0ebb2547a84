use super::*;

#[test]
fn seven_spanish_jobs_with_suffix() {
    let jobs = spanish_ipad_jobs();
    assert_eq!(jobs.len(), 7);
    for job in &jobs {
        assert!(job.out.ends_with("-ES.png"), "{}", job.out);
        assert_eq!(
            job.out.trim_end_matches("-ES.png"),
            job.base.trim_end_matches(".png")
        );
        assert!(job.screenshot.starts_with("Simulator Screenshot - iPad Pro 13-inch (M5)"));
        job.validate().unwrap();
    }
}

#[test]
fn first_job_matches_start_screen() {
    let job = &spanish_ipad_jobs()[0];
    assert_eq!(job.base, "StartScreenExposed.png");
    assert_eq!(
        job.screenshot,
        "Simulator Screenshot - iPad Pro 13-inch (M5) - 2026-02-26 at 22.01.32.png"
    );
    assert_eq!(
        job.headline,
        "Empieza al instante en modo solo o multijugador."
    );
    assert_eq!(job.out, "StartScreenExposed-ES.png");
}

#[test]
fn outputs_are_unique() {
    let jobs = spanish_ipad_jobs();
    let outs: std::collections::BTreeSet<_> = jobs.iter().map(|j| j.out.as_str()).collect();
    assert_eq!(outs.len(), jobs.len());
}

#[test]
fn builtin_manifest_validates() {
    JobManifest::spanish_ipad().validate().unwrap();
}
