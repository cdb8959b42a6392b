use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, info_span, instrument, Instrument};

use super::validation::{validate_selection, FileSource};
use crate::api::ImageUploader;
use crate::domain::{SelectedFile, UploadedImageUrl};
use crate::error::{UploadError, ValidationError};

/// What the upload control holds. Published on a watch channel so the owning
/// form can read the uploaded URL and the loading flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub image_file: Option<SelectedFile>,
    pub is_loading: bool,
    pub uploaded_image_url: Option<UploadedImageUrl>,
    /// Value of the file input, cleared on removal.
    pub picker_value: Option<String>,
    generation: u64,
}

impl UploadState {
    /// Counter of accepted selections; only the latest upload may write back.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The three things the control can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadView {
    Prompt { disabled: bool },
    Loading,
    FileSelected { file_name: String, removable: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    Uploaded(UploadedImageUrl),
    /// A newer selection started before this upload finished; its result was
    /// dropped.
    Superseded,
    Failed(UploadError),
}

/// An upload started by a file selection.
#[derive(Debug)]
pub struct UploadTask {
    generation: u64,
    handle: JoinHandle<UploadOutcome>,
}

impl UploadTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn outcome(self) -> UploadOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(e) => UploadOutcome::Failed(UploadError::Aborted(e.to_string())),
        }
    }
}

/// Product image picker with drag-and-drop, validation and upload.
///
/// Selecting a valid file starts its upload right away. Selections made while
/// an earlier upload is still running supersede it. In edit mode selection
/// and removal do nothing.
pub struct ImageUploadWidget {
    uploader: Arc<dyn ImageUploader>,
    state: Arc<watch::Sender<UploadState>>,
    edit_mode: bool,
}

impl ImageUploadWidget {
    pub fn new(uploader: Arc<dyn ImageUploader>) -> Self {
        let (state, _) = watch::channel(UploadState::default());
        Self {
            uploader,
            state: Arc::new(state),
            edit_mode: false,
        }
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// File chosen through the file input.
    ///
    /// Must be called from within a tokio runtime.
    pub fn pick_file(&self, file: Option<SelectedFile>) -> Result<Option<UploadTask>, ValidationError> {
        self.select(FileSource::Picker, file)
    }

    /// File dropped onto the control.
    ///
    /// Must be called from within a tokio runtime.
    pub fn drop_file(&self, file: Option<SelectedFile>) -> Result<Option<UploadTask>, ValidationError> {
        self.select(FileSource::Drop, file)
    }

    /// Clears the selected file and the file input. Returns whether anything
    /// changed.
    pub fn remove_file(&self) -> bool {
        if self.edit_mode {
            debug!("Ignoring removal in edit mode");
            return false;
        }
        self.state.send_if_modified(|state| {
            let changed = state.image_file.is_some() || state.picker_value.is_some();
            state.image_file = None;
            state.picker_value = None;
            changed
        })
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn uploaded_image_url(&self) -> Option<UploadedImageUrl> {
        self.state.borrow().uploaded_image_url.clone()
    }

    pub fn view(&self) -> UploadView {
        let state = self.state.borrow();
        match &state.image_file {
            None => UploadView::Prompt {
                disabled: self.edit_mode,
            },
            Some(_) if state.is_loading => UploadView::Loading,
            Some(file) => UploadView::FileSelected {
                file_name: file.name.clone(),
                removable: !self.edit_mode,
            },
        }
    }

    #[instrument(skip(self, file))]
    fn select(
        &self,
        source: FileSource,
        file: Option<SelectedFile>,
    ) -> Result<Option<UploadTask>, ValidationError> {
        if self.edit_mode {
            debug!("Ignoring selection in edit mode");
            return Ok(None);
        }

        let file = validate_selection(source, file).map_err(|e| {
            info!(reason = ?e.reason, "File rejected");
            e
        })?;

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.picker_value = Some(file.name.clone());
            state.image_file = Some(file.clone());
            state.is_loading = true;
        });

        let span = info_span!("image_upload", generation, file_name = %file.name);
        let handle = tokio::spawn(
            run_upload(Arc::clone(&self.uploader), Arc::clone(&self.state), generation, file)
                .instrument(span),
        );
        Ok(Some(UploadTask { generation, handle }))
    }
}

async fn run_upload(
    uploader: Arc<dyn ImageUploader>,
    state: Arc<watch::Sender<UploadState>>,
    generation: u64,
    file: SelectedFile,
) -> UploadOutcome {
    debug!("Sending request");
    let result = uploader.upload_image(&file).await;

    let applied = state.send_if_modified(|state| {
        if state.generation != generation {
            return false;
        }
        state.is_loading = false;
        if let Ok(url) = &result {
            state.uploaded_image_url = Some(url.clone());
        }
        true
    });

    match result {
        _ if !applied => {
            info!("Upload superseded by a newer selection");
            UploadOutcome::Superseded
        }
        Ok(url) => {
            info!(url = %url, "Image uploaded");
            UploadOutcome::Uploaded(url)
        }
        Err(e) => {
            error!(error = %e, "Error during upload");
            UploadOutcome::Failed(UploadError::Api(e))
        }
    }
}
