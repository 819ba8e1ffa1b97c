// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lazily loaded image textures.
//!
//! Images decode on background threads and arrive over a channel, polled
//! once per frame. Sources that cannot be resolved or decoded are remembered
//! as failed and simply not drawn.

use crate::io::media::{self, LoadedImage};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

enum Slot {
    Loading(Receiver<Result<LoadedImage, String>>),
    Ready(egui::TextureHandle),
    Failed,
}

pub struct TextureCache {
    root: PathBuf,
    slots: HashMap<String, Slot>,
}

impl TextureCache {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slots: HashMap::new(),
        }
    }

    /// The texture for `src`, starting a load on first use.
    pub fn get(&mut self, src: &str) -> Option<&egui::TextureHandle> {
        if !self.slots.contains_key(src) {
            let slot = self.start_load(src);
            self.slots.insert(src.to_owned(), slot);
        }
        match self.slots.get(src) {
            Some(Slot::Ready(texture)) => Some(texture),
            _ => None,
        }
    }

    /// True once `src` has either loaded or failed.
    pub fn is_settled(&self, src: &str) -> bool {
        matches!(self.slots.get(src), Some(Slot::Ready(_)) | Some(Slot::Failed))
    }

    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, Slot::Loading(_)))
    }

    /// Drop everything, e.g. after a new catalog is loaded.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Turn finished loads into textures.
    pub fn poll(&mut self, ctx: &egui::Context) {
        for (src, slot) in self.slots.iter_mut() {
            let outcome = match slot {
                Slot::Loading(receiver) => receiver.try_recv(),
                _ => continue,
            };
            *slot = match outcome {
                Ok(Ok(loaded)) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    log::debug!("Loaded image {} ({}x{})", src, loaded.width, loaded.height);
                    Slot::Ready(ctx.load_texture(src.clone(), color_image, egui::TextureOptions::LINEAR))
                }
                Ok(Err(e)) => {
                    log::warn!("Failed to load image {}: {}", src, e);
                    Slot::Failed
                }
                Err(TryRecvError::Empty) => continue,
                Err(TryRecvError::Disconnected) => Slot::Failed,
            };
        }
    }

    fn start_load(&self, src: &str) -> Slot {
        if media::is_video(src) {
            return Slot::Failed;
        }
        let Some(path) = media::resolve_path(&self.root, src) else {
            log::debug!("Skipping unresolvable media {}", src);
            return Slot::Failed;
        };

        let (sender, receiver) = channel();
        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
        Slot::Loading(receiver)
    }
}
