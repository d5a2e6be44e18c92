//! Strided column dispatch across a fixed pool of workers.
//!
//! Worker `i` of `W` owns columns `i, i + W, i + 2W, ...`. Each worker
//! gets exclusive `&mut` access to exactly its columns, so the shared
//! framebuffer needs no locking.

use crate::{pack_rgb, Camera, Column, Framebuffer, RenderError, Tracer};

/// Columns owned by `worker` out of `workers`, for an image `width` pixels wide.
pub fn worker_columns(worker: usize, workers: usize, width: u32) -> impl Iterator<Item = u32> {
    let start = u32::try_from(worker).unwrap_or(u32::MAX).min(width);
    (start..width).step_by(workers.max(1))
}

/// Hand out the framebuffer's columns to `workers` workers by residue
/// of the column index. Entry `i` holds worker `i`'s columns in order.
pub fn partition_columns(framebuffer: &mut Framebuffer, workers: usize) -> Vec<Vec<Column<'_>>> {
    let workers = workers.max(1);
    let mut assignments: Vec<Vec<Column<'_>>> = (0..workers).map(|_| Vec::new()).collect();

    for column in framebuffer.columns_mut() {
        assignments[column.x as usize % workers].push(column);
    }

    assignments
}

/// Decile progress tracking for one worker's column sweep.
#[derive(Debug, Clone)]
pub struct Progress {
    width: u32,
    next_report: f32,
}

impl Progress {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            next_report: 10.0,
        }
    }

    /// Record that column `x` is done. Returns the percentage to report
    /// when a new decile has been passed.
    pub fn observe(&mut self, x: u32) -> Option<u32> {
        if self.width == 0 {
            return None;
        }

        let percent = x as f32 / self.width as f32 * 100.0;
        if percent > self.next_report {
            self.next_report += 10.0;
            Some(percent as u32)
        } else {
            None
        }
    }
}

fn run_worker(worker: usize, columns: Vec<Column<'_>>, camera: &Camera, tracer: &Tracer<'_>) {
    let mut progress = (worker == 0).then(|| Progress::new(camera.image_width));

    for mut column in columns {
        for y in 0..column.height() {
            let ray = camera.get_ray(column.x, y);
            let color = tracer.trace(&ray, 0);
            column.set(y, pack_rgb(color));
        }

        if let Some(percent) = progress.as_mut().and_then(|p| p.observe(column.x)) {
            log::info!("{}% done", percent);
        }
    }

    if progress.is_some() {
        log::info!("100% done");
    }
}

/// Render every pixel of `framebuffer` on a pool of `workers` threads.
///
/// Blocks until all workers have finished.
pub fn dispatch(
    camera: &Camera,
    tracer: &Tracer<'_>,
    framebuffer: &mut Framebuffer,
    workers: usize,
) -> Result<(), RenderError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("tracer-{}", i))
        .build()?;

    let assignments = partition_columns(framebuffer, workers);

    pool.scope(|scope| {
        for (worker, columns) in assignments.into_iter().enumerate() {
            log::debug!("tracer-{} owns {} columns", worker, columns.len());
            scope.spawn(move |_| run_worker(worker, columns, camera, tracer));
        }
    });

    Ok(())
}
