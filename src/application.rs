use std::sync::Arc;

use cosmic::app::{Core, Task as CosmicTask};
use cosmic::iced::Length;
use cosmic::widget::{self, button, container, icon, row};
use cosmic::{Application, Element, executor};

use crate::config::TodoConfig;
use crate::core::controller::{Snapshot, TaskListController};
use crate::core::task::Task;
use crate::error::TodoError;
use crate::fl;
use crate::message::Message;
use crate::pages;
use crate::store::{FileStore, TaskStore};

pub struct SimpleTodo {
    core: Core,
    config: TodoConfig,
    store: TaskStore<FileStore>,
    controller: TaskListController,
    validation_error: Option<TodoError>,
}

pub struct Flags {
    pub config: TodoConfig,
}

impl Application for SimpleTodo {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = crate::config::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;

        if let Err(e) = config.ensure_data_dir() {
            log::error!("Failed to create data directory: {}", e);
        }

        let store = TaskStore::new(Arc::new(FileStore::new(config.data_directory.clone())));

        let app = Self {
            core,
            config,
            store,
            controller: TaskListController::new(),
            validation_error: None,
        };

        let load = app.load_tasks(Message::TasksLoaded);
        (app, load)
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        let mut refresh_btn = button::icon(icon::from_name("view-refresh-symbolic"));
        if !self.controller.is_refreshing() {
            refresh_btn = refresh_btn.on_press(Message::Refresh);
        }

        vec![row().spacing(4).push(refresh_btn).into()]
    }

    fn dialog(&self) -> Option<Element<'_, Message>> {
        let error = self.validation_error.as_ref()?;
        let body = match error {
            TodoError::EmptyTitle => fl!("error-empty-title"),
        };

        Some(
            widget::dialog()
                .title(fl!("error-title"))
                .body(body)
                .primary_action(
                    button::suggested(fl!("dialog-ok")).on_press(Message::DismissValidation),
                )
                .into(),
        )
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.validation_error.is_some() {
            self.validation_error = None;
        } else if self.controller.pending_delete().is_some() {
            self.controller.cancel_delete();
        }
        CosmicTask::none()
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            Message::InputChanged(value) => {
                self.controller.set_input(value);
            }

            Message::Submit => match self.controller.submit_input() {
                Ok(snapshot) => return self.persist(snapshot),
                Err(e) => {
                    log::debug!("Rejected task input: {}", e);
                    self.validation_error = Some(e);
                }
            },

            Message::DismissValidation => {
                self.validation_error = None;
            }

            Message::ToggleTask(id) => {
                if let Some(snapshot) = self.controller.toggle_task(&id) {
                    return self.persist(snapshot);
                }
            }

            Message::ConfirmDeleteTask(id) => {
                self.controller.request_delete(&id);
            }

            Message::CancelDeleteTask => {
                self.controller.cancel_delete();
            }

            Message::DeleteTask(id) => {
                if let Some(snapshot) = self.controller.confirm_delete(&id) {
                    return self.persist(snapshot);
                }
            }

            Message::Refresh => {
                self.controller.begin_refresh();
                return self.load_tasks(Message::RefreshCompleted);
            }

            Message::TasksLoaded(loaded) => {
                self.controller.initialize(loaded);
            }

            Message::RefreshCompleted(loaded) => {
                self.controller.finish_refresh(loaded);
            }

            Message::TasksSaved(result) => {
                if let Err(e) = result {
                    log::warn!("Task list not saved to {}: {}", self.config.store_path().display(), e);
                }
            }
        }

        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        cosmic::iced::event::listen_with(|event, _status, _id| {
            match event {
                cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key: cosmic::iced::keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if c.as_str() == "r" && modifiers.control() => Some(Message::Refresh),
                _ => None,
            }
        })
    }

    fn view(&self) -> Element<'_, Message> {
        let views = self.controller.views();
        let content = pages::task_list::task_list_view(
            &views,
            self.controller.input(),
            self.controller.is_refreshing(),
            self.controller.pending_delete(),
        );

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl SimpleTodo {
    fn load_tasks(
        &self,
        on_done: fn(Option<Vec<Task>>) -> Message,
    ) -> CosmicTask<Message> {
        let store = self.store.clone();
        CosmicTask::perform(
            async move { store.load().await },
            move |loaded| cosmic::Action::App(on_done(loaded)),
        )
    }

    /// Write a snapshot in the background. Failures are logged, never shown.
    fn persist(&self, snapshot: Snapshot) -> CosmicTask<Message> {
        let store = self.store.clone();
        CosmicTask::perform(
            async move {
                store
                    .save(snapshot.tasks())
                    .await
                    .map_err(|e| e.to_string())
            },
            |result| cosmic::Action::App(Message::TasksSaved(result)),
        )
    }
}
