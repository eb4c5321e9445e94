use common::studio::ImageJob;

pub enum Msg {
    SelectCopy(usize),
    SelectImage(usize),
    RetryImage,
    /// Completion of an image job: the image URL or an error description.
    ImageFinished(ImageJob, Result<String, String>),
    Save,
    OpenGuidelines,
    CloseGuidelines,
    /// Text to copy and the confirmation to show afterwards.
    CopyText(String, &'static str),
}
