use indicatif::{ProgressBar, ProgressStyle};

/// Runs shorter than this do not get a visible progress bar.
const MIN_VISIBLE_LEN: u64 = 100;

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    if len < MIN_VISIBLE_LEN {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) = ProgressStyle::with_template(
        " {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}",
    ) {
        bar.set_style(style);
    }
    bar
}
