//! Offline block renderer.

use crate::{Error, Result};
use glide_core::AudioProcessor;

/// Drives an [`AudioProcessor`] over whole files, block by block.
///
/// Mirrors a host: one `prepare` per render, then `process_block` on
/// consecutive chunks of at most `block_size` frames. The final chunk may
/// be shorter.
#[derive(Debug)]
pub struct OfflineRenderer<P> {
    processor: P,
    block_size: usize,
}

impl<P: AudioProcessor> OfflineRenderer<P> {
    /// Create a renderer. `block_size` must be at least 1.
    pub fn new(processor: P, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize(block_size));
        }
        Ok(Self {
            processor,
            block_size,
        })
    }

    /// Frames per processing block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The wrapped processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// The wrapped processor, mutably.
    pub fn processor_mut(&mut self) -> &mut P {
        &mut self.processor
    }

    /// Consume the renderer, returning the processor.
    pub fn into_inner(self) -> P {
        self.processor
    }

    /// Render `channels` in place.
    ///
    /// The first `input_channels` buffers hold input audio; the rest are
    /// output-only and are overwritten.
    pub fn render(
        &mut self,
        channels: &mut [Vec<f32>],
        input_channels: usize,
        sample_rate: f64,
    ) -> Result<()> {
        self.render_with_progress(channels, input_channels, sample_rate, |_| {})
    }

    /// Like [`render`](Self::render), calling `on_block` with the number of
    /// frames finished after every block.
    pub fn render_with_progress<F>(
        &mut self,
        channels: &mut [Vec<f32>],
        input_channels: usize,
        sample_rate: f64,
        mut on_block: F,
    ) -> Result<()>
    where
        F: FnMut(usize),
    {
        if !self.processor.supports_sample_rate(sample_rate) {
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        if input_channels > channels.len() {
            return Err(Error::ChannelMismatch(format!(
                "{input_channels} input channels but only {} buffers",
                channels.len()
            )));
        }
        let frames = channels.first().map_or(0, Vec::len);
        if channels.iter().any(|c| c.len() != frames) {
            return Err(Error::ChannelMismatch(
                "channel buffers differ in length".to_string(),
            ));
        }

        tracing::info!(
            processor = self.processor.name(),
            channels = channels.len(),
            input_channels,
            frames,
            block_size = self.block_size,
            sample_rate,
            "rendering"
        );

        self.processor.prepare(sample_rate, self.block_size);

        let mut start = 0;
        while start < frames {
            let end = (start + self.block_size).min(frames);
            let mut block: Vec<&mut [f32]> =
                channels.iter_mut().map(|c| &mut c[start..end]).collect();
            self.processor.process_block(&mut block, input_channels);
            start = end;
            on_block(start);
        }

        self.processor.release();
        Ok(())
    }
}
