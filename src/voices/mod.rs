//! Voices: the voice library, per-voice settings and shared/similar voice lookups.

mod client;
mod types;

pub use client::VoicesService;
pub use types::{
    FineTuning, ListVoicesResponse, ManualVerification, ModerationCheck, Recording,
    ResourceRestriction, Sample, SharedVoicesResponse, SharingSettings, SimilarVoicesRequest,
    UpdateVoiceRequest, VerificationAttempt, VerificationFile, Voice, VoiceSettings,
    VoiceVerification,
};
