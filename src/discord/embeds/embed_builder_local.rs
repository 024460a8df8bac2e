// Chainable wrapper around serenity's `CreateEmbed`.
//
// serenity's builder can only append fields, so fields are kept here and
// applied in `build`. That is what makes `set_fields` possible.

use poise::serenity_prelude::{self as serenity, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFieldLocal {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

impl EmbedFieldLocal {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmbedBuilderLocal {
    embed: CreateEmbed,
    fields: Vec<EmbedFieldLocal>,
}

impl EmbedBuilderLocal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies an existing embed. The timestamp is not carried over.
    pub fn from_embed(embed: &serenity::Embed) -> Self {
        let mut builder = Self::new();

        if let Some(author) = &embed.author {
            let mut create = CreateEmbedAuthor::new(author.name.clone());
            if let Some(url) = &author.url {
                create = create.url(url.clone());
            }
            if let Some(icon_url) = &author.icon_url {
                create = create.icon_url(icon_url.clone());
            }
            builder = builder.author(create);
        }
        if let Some(colour) = embed.colour {
            builder = builder.colour(colour);
        }
        if let Some(description) = &embed.description {
            builder = builder.description(description.clone());
        }
        if let Some(footer) = &embed.footer {
            let mut create = CreateEmbedFooter::new(footer.text.clone());
            if let Some(icon_url) = &footer.icon_url {
                create = create.icon_url(icon_url.clone());
            }
            builder = builder.footer(create);
        }
        if let Some(image) = &embed.image {
            builder = builder.image(image.url.clone());
        }
        if let Some(thumbnail) = &embed.thumbnail {
            builder = builder.thumbnail(thumbnail.url.clone());
        }
        if let Some(title) = &embed.title {
            builder = builder.title(title.clone());
        }
        if let Some(url) = &embed.url {
            builder = builder.url(url.clone());
        }

        builder.add_fields(embed.fields.iter().map(|field| EmbedFieldLocal {
            name: field.name.clone(),
            value: field.value.clone(),
            inline: field.inline,
        }))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed = self.embed.title(title);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed = self.embed.description(description);
        self
    }

    pub fn colour(mut self, colour: impl Into<serenity::Colour>) -> Self {
        self.embed = self.embed.colour(colour);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.embed = self.embed.url(url);
        self
    }

    pub fn author(mut self, author: CreateEmbedAuthor) -> Self {
        self.embed = self.embed.author(author);
        self
    }

    pub fn footer(mut self, footer: CreateEmbedFooter) -> Self {
        self.embed = self.embed.footer(footer);
        self
    }

    pub fn footer_text(self, text: impl Into<String>) -> Self {
        self.footer(CreateEmbedFooter::new(text))
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.embed = self.embed.image(url);
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.embed = self.embed.thumbnail(url);
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<serenity::Timestamp>) -> Self {
        self.embed = self.embed.timestamp(timestamp);
        self
    }

    /// Appends fields after the existing ones.
    pub fn add_fields(mut self, fields: impl IntoIterator<Item = EmbedFieldLocal>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Replaces all fields.
    pub fn set_fields(mut self, fields: impl IntoIterator<Item = EmbedFieldLocal>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn fields(&self) -> &[EmbedFieldLocal] {
        &self.fields
    }

    /// The embed as it would be sent to Discord.
    pub fn data(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self.build())
    }

    pub fn build(&self) -> CreateEmbed {
        self.embed.clone().fields(
            self.fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
        )
    }

    pub async fn send(
        &self,
        http: impl serenity::CacheHttp,
        channel_id: serenity::ChannelId,
    ) -> Result<serenity::Message, serenity::Error> {
        channel_id
            .send_message(http, serenity::CreateMessage::new().embed(self.build()))
            .await
    }

    /// Replaces the embed and content of an existing message.
    pub async fn edit(
        &self,
        http: impl serenity::CacheHttp,
        message: &mut serenity::Message,
        content: impl Into<String>,
    ) -> Result<(), serenity::Error> {
        message
            .edit(
                http,
                serenity::EditMessage::new()
                    .content(content)
                    .embed(self.build()),
            )
            .await
    }
}
