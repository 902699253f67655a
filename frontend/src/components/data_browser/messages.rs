use common::error::ClientError;
use common::model::submission::FormSubmission;
use common::model::template::Jurisdiction;
use common::requests::Page;

pub enum Msg {
    SetJurisdiction(Jurisdiction),
    SetFormType(String),
    Fetch,
    /// Response for the request with the given sequence number.
    PageLoaded(u64, Result<Page<FormSubmission>, ClientError>),
    PreviousPage,
    NextPage,
    RequestDelete(String),
    Deleted(String, Result<(), ClientError>),
    ShowSignature(String),
    CloseSignature,
    DismissNote,
}
