//! Request-scoped render state.

use crate::options::RenderOptions;

/// One page render. Instance ids start at 1 and are handed out in render
/// order; a page must not be shared between concurrent renders.
#[derive(Debug)]
pub struct Page<'o> {
    options: &'o RenderOptions,
    component_count: u32,
}

impl<'o> Page<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            component_count: 0,
        }
    }

    /// Allocate the next component instance id.
    pub fn add_component(&mut self) -> u32 {
        self.component_count += 1;
        self.component_count
    }

    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    pub fn options(&self) -> &'o RenderOptions {
        self.options
    }
}
