use crate::foundation::core::Canvas;

/// Lifetime counters for the offscreen buffer set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Buffer sets allocated so far.
    pub allocations: u64,
    /// Buffer sets released so far (resize or explicit teardown).
    pub releases: u64,
    /// Bytes currently held by the live set, if any.
    pub retained_bytes: usize,
}

/// Scratch pixmaps and the rasterizer reused by every draw until the next resize.
pub(crate) struct OffscreenBuffers {
    pub(crate) canvas: Canvas,
    /// Child content before masking.
    pub(crate) src: vello_cpu::Pixmap,
    /// Wedge mask, then the masked child; also used for the overlay pass.
    pub(crate) dst: vello_cpu::Pixmap,
    /// Cached background + children.
    pub(crate) frame: vello_cpu::Pixmap,
    pub(crate) ctx: vello_cpu::RenderContext,
}

impl OffscreenBuffers {
    fn new(canvas: Canvas, width: u16, height: u16) -> Self {
        Self {
            canvas,
            src: vello_cpu::Pixmap::new(width, height),
            dst: vello_cpu::Pixmap::new(width, height),
            frame: vello_cpu::Pixmap::new(width, height),
            ctx: vello_cpu::RenderContext::new(width, height),
        }
    }

    fn byte_len(&self) -> usize {
        self.canvas.byte_len().saturating_mul(3)
    }
}

/// Owner of the (optional) live buffer set.
///
/// The set is keyed by canvas size; a size change drops the old set before allocating.
#[derive(Default)]
pub(crate) struct BufferSet {
    requested: Option<Canvas>,
    live: Option<OffscreenBuffers>,
    stats: BufferStats,
}

impl BufferSet {
    /// Make sure buffers match `canvas`. Returns `true` when the set was replaced or torn down.
    pub(crate) fn ensure(&mut self, canvas: Canvas) -> bool {
        if self.requested == Some(canvas) {
            return false;
        }
        self.release();
        self.requested = Some(canvas);

        if canvas.is_empty() {
            return true;
        }
        let (Ok(width), Ok(height)) = (u16::try_from(canvas.width), u16::try_from(canvas.height))
        else {
            tracing::warn!(
                width = canvas.width,
                height = canvas.height,
                "canvas exceeds rasterizer limits; offscreen buffers left unallocated"
            );
            return true;
        };

        let buffers = OffscreenBuffers::new(canvas, width, height);
        self.stats.allocations += 1;
        self.stats.retained_bytes = buffers.byte_len();
        tracing::debug!(
            width,
            height,
            bytes = self.stats.retained_bytes,
            "allocated offscreen buffers"
        );
        self.live = Some(buffers);
        true
    }

    /// Drop the live set, if any. The next [`BufferSet::ensure`] allocates again.
    pub(crate) fn release(&mut self) {
        self.requested = None;
        if let Some(old) = self.live.take() {
            self.stats.releases += 1;
            self.stats.retained_bytes = 0;
            tracing::debug!(
                width = old.canvas.width,
                height = old.canvas.height,
                "released offscreen buffers"
            );
        }
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut OffscreenBuffers> {
        self.live.as_mut()
    }

    pub(crate) fn is_allocated(&self) -> bool {
        self.live.is_some()
    }

    pub(crate) fn stats(&self) -> BufferStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffers.rs"]
mod tests;
