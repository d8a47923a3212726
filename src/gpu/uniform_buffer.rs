use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// A uniform buffer holding exactly one `T`.
///
/// `T` is one of the `#[repr(C)]` blocks from
/// [`renderer`](crate::renderer), rewritten every frame with
/// [`write`](Self::write).
pub struct UniformBuffer<T: bytemuck::Pod> {
    buffer: wgpu::Buffer,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformBuffer<T> {
    /// Buffer initialized with `value`.
    pub fn new(device: &wgpu::Device, label: &str, value: &T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(value),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            buffer,
            _marker: PhantomData,
        }
    }

    /// Queue an overwrite of the whole block.
    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    /// The underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bind group entry exposing the whole buffer at `binding`.
    #[must_use]
    pub fn bind_group_entry(&self, binding: u32) -> wgpu::BindGroupEntry<'_> {
        wgpu::BindGroupEntry {
            binding,
            resource: self.buffer.as_entire_binding(),
        }
    }

    /// Size of one block in bytes.
    #[must_use]
    pub fn size() -> wgpu::BufferAddress {
        size_of::<T>() as wgpu::BufferAddress
    }
}

/// Layout entry for a uniform block of type `T` at `binding`.
#[must_use]
pub fn layout_entry<T: bytemuck::Pod>(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(
                size_of::<T>() as wgpu::BufferAddress,
            ),
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{InstanceParams, Uniforms};

    #[test]
    fn layout_entry_carries_block_size() {
        let entry = layout_entry::<Uniforms>(0, wgpu::ShaderStages::VERTEX);
        let wgpu::BindingType::Buffer {
            ty,
            min_binding_size,
            ..
        } = entry.ty
        else {
            panic!("expected a buffer binding");
        };
        assert_eq!(ty, wgpu::BufferBindingType::Uniform);
        assert_eq!(min_binding_size.map(std::num::NonZeroU64::get), Some(192));
    }

    #[test]
    fn block_size_matches_type() {
        assert_eq!(UniformBuffer::<InstanceParams>::size(), 64);
    }
}
