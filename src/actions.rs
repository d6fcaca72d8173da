//! Destructive Actions
//!
//! Every delete asks for confirmation first. Declining issues no request.

use std::future::Future;

use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::loaders;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Project,
    Task,
    NonProject,
    ManPower,
    Assignment,
}

impl DeleteTarget {
    pub fn prompt(self) -> &'static str {
        match self {
            DeleteTarget::Project => "Apakah Anda yakin ingin menghapus proyek ini?",
            DeleteTarget::Task => "Apakah Anda yakin ingin menghapus task ini?",
            DeleteTarget::NonProject => "Apakah Anda yakin ingin menghapus non-proyek ini?",
            DeleteTarget::ManPower => "Apakah Anda yakin ingin menghapus man power ini?",
            DeleteTarget::Assignment => "Apakah Anda yakin ingin menghapus assignment ini?",
        }
    }

    pub fn path(self, id: u32) -> String {
        let resource = match self {
            DeleteTarget::Project => "projects",
            DeleteTarget::Task => "tasks",
            DeleteTarget::NonProject => "non-projects",
            DeleteTarget::ManPower => "manpower",
            DeleteTarget::Assignment => "assignments",
        };
        format!("/api/{}/{}", resource, id)
    }

    pub fn success_message(self) -> &'static str {
        match self {
            DeleteTarget::Project => "Proyek berhasil dihapus!",
            DeleteTarget::Task => "Task berhasil dihapus!",
            DeleteTarget::NonProject => "Non-proyek berhasil dihapus!",
            DeleteTarget::ManPower => "Man Power berhasil dihapus!",
            DeleteTarget::Assignment => "Assignment berhasil dihapus!",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            DeleteTarget::Project => "Gagal menghapus proyek",
            DeleteTarget::Task => "Gagal menghapus task",
            DeleteTarget::NonProject => "Gagal menghapus non-proyek",
            DeleteTarget::ManPower => "Gagal menghapus man power",
            DeleteTarget::Assignment => "Gagal menghapus assignment",
        }
    }
}

/// Run `delete` only if `confirm` accepts the prompt.
/// `None` means the user declined.
pub async fn confirm_and_delete<C, D, Fut>(target: DeleteTarget, confirm: C, delete: D) -> Option<Result<(), ApiError>>
where
    C: FnOnce(&str) -> bool,
    D: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !confirm(target.prompt()) {
        return None;
    }
    Some(delete().await)
}

/// `window.confirm`; false when unavailable
pub fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Confirm, delete, toast, then resync the affected view
pub fn perform_delete(ctx: AppContext, target: DeleteTarget, id: u32) {
    spawn_local(async move {
        let api = ctx.api();
        let path = target.path(id);
        let outcome = confirm_and_delete(target, browser_confirm, || api.delete(&path)).await;

        match outcome {
            None => {}
            Some(Ok(())) => {
                log::debug!("[actions] deleted {}", path);
                ctx.toast.success(target.success_message());
                match target {
                    DeleteTarget::Project => loaders::load_all_data(ctx).await,
                    DeleteTarget::Task => loaders::load_project_details(ctx).await,
                    DeleteTarget::NonProject => loaders::load_non_projects(ctx).await,
                    DeleteTarget::ManPower => loaders::load_manpower(ctx).await,
                    DeleteTarget::Assignment => loaders::load_manpower_details(ctx).await,
                }
            }
            Some(Err(e)) => {
                log::error!("[actions] delete {} failed: {}", path, e);
                ctx.toast.error(&e.user_message(target.failure_message()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use futures::executor::block_on;

    const ALL: [DeleteTarget; 5] = [
        DeleteTarget::Project,
        DeleteTarget::Task,
        DeleteTarget::NonProject,
        DeleteTarget::ManPower,
        DeleteTarget::Assignment,
    ];

    #[test]
    fn test_declined_confirm_issues_no_request() {
        for target in ALL {
            let calls = Cell::new(0);
            let outcome = block_on(confirm_and_delete(
                target,
                |_| false,
                || {
                    calls.set(calls.get() + 1);
                    async { Ok(()) }
                },
            ));
            assert_eq!(outcome, None);
            assert_eq!(calls.get(), 0);
        }
    }

    #[test]
    fn test_accepted_confirm_issues_one_request() {
        let calls = Cell::new(0);
        let prompt = Cell::new("");
        let outcome = block_on(confirm_and_delete(
            DeleteTarget::ManPower,
            |message| {
                prompt.set(DeleteTarget::ManPower.prompt());
                message == prompt.get()
            },
            || {
                calls.set(calls.get() + 1);
                async { Err(ApiError::Network("offline".into())) }
            },
        ));
        assert_eq!(calls.get(), 1);
        assert_eq!(outcome, Some(Err(ApiError::Network("offline".into()))));
    }

    #[test]
    fn test_paths() {
        assert_eq!(DeleteTarget::NonProject.path(4), "/api/non-projects/4");
        assert_eq!(DeleteTarget::ManPower.path(2), "/api/manpower/2");
        assert_eq!(DeleteTarget::Assignment.path(9), "/api/assignments/9");
    }
}
