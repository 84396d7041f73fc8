//! Idempotent schema bootstrap: tables, triggers, and the sentinel account
//!
//! The reaction triggers are the counter projection: every insert or delete
//! on a reactions table adjusts the subject's tallies inside the same
//! transaction as the ledger mutation, so counters and ledger can never be
//! observed disagreeing. Post rows additionally rescore their popularity on
//! every write that touches the score inputs.
//!
//! Postgres has no `CREATE TRIGGER IF NOT EXISTS`, so triggers are dropped
//! and recreated on every bootstrap. That also republishes the configured
//! popularity weights: changing them is a restart, not a migration.

use forum_common::config::PopularityConfig;
use sqlx::PgPool;
use tracing::{debug, info};

const USER_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    last_active TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

/// The sentinel account subjects are re-homed to when their owner is
/// deleted. Must exist before any ownership column can default to it.
const SENTINEL_USER: &str = r"
INSERT INTO users (id, username, password_hash)
VALUES (0, 'deleted', '')
ON CONFLICT (id) DO NOTHING;
";

const TOPIC_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS topics (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    created_by BIGINT NOT NULL DEFAULT 0 REFERENCES users (id) ON DELETE SET DEFAULT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    document tsvector GENERATED ALWAYS AS (
        to_tsvector('english', title || ' ' || description)
    ) STORED
);
";

const TOPIC_DOCUMENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS topics_document_idx ON topics USING gin (document);";

const POST_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS posts (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    topic_id BIGINT NOT NULL REFERENCES topics (id) ON DELETE CASCADE,
    likes BIGINT NOT NULL DEFAULT 0,
    dislikes BIGINT NOT NULL DEFAULT 0,
    is_edited BOOLEAN NOT NULL DEFAULT FALSE,
    views BIGINT NOT NULL DEFAULT 0,
    popularity BIGINT NOT NULL DEFAULT 0,
    created_by BIGINT NOT NULL DEFAULT 0 REFERENCES users (id) ON DELETE SET DEFAULT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    document tsvector GENERATED ALWAYS AS (
        to_tsvector('english', title || ' ' || description)
    ) STORED
);
";

const POST_DOCUMENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS posts_document_idx ON posts USING gin (document);";

const POST_REACTION_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS post_reactions (
    id BIGSERIAL PRIMARY KEY,
    post_id BIGINT NOT NULL REFERENCES posts (id) ON DELETE CASCADE,
    user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    vote BOOLEAN NOT NULL,
    UNIQUE (post_id, user_id)
);
";

const COMMENT_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS comments (
    id BIGSERIAL PRIMARY KEY,
    description TEXT NOT NULL,
    likes BIGINT NOT NULL DEFAULT 0,
    dislikes BIGINT NOT NULL DEFAULT 0,
    is_edited BOOLEAN NOT NULL DEFAULT FALSE,
    post_id BIGINT NOT NULL REFERENCES posts (id) ON DELETE CASCADE,
    parent_comment_id BIGINT REFERENCES comments (id) ON DELETE CASCADE,
    created_by BIGINT NOT NULL DEFAULT 0 REFERENCES users (id) ON DELETE SET DEFAULT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const COMMENT_REACTION_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS comment_reactions (
    id BIGSERIAL PRIMARY KEY,
    comment_id BIGINT NOT NULL REFERENCES comments (id) ON DELETE CASCADE,
    user_id BIGINT NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    vote BOOLEAN NOT NULL,
    UNIQUE (comment_id, user_id)
);
";

/// Tally projection for post reactions: the ledger row and the counter
/// adjustment commit or roll back together.
const POST_REACTION_PROJECTION_FN: &str = r"
CREATE OR REPLACE FUNCTION project_post_reaction() RETURNS trigger AS $$
BEGIN
    IF TG_OP = 'INSERT' THEN
        UPDATE posts SET
            likes = likes + CASE WHEN NEW.vote THEN 1 ELSE 0 END,
            dislikes = dislikes + CASE WHEN NEW.vote THEN 0 ELSE 1 END
        WHERE posts.id = NEW.post_id;
        RETURN NEW;
    ELSE
        UPDATE posts SET
            likes = likes - CASE WHEN OLD.vote THEN 1 ELSE 0 END,
            dislikes = dislikes - CASE WHEN OLD.vote THEN 0 ELSE 1 END
        WHERE posts.id = OLD.post_id;
        RETURN OLD;
    END IF;
END;
$$ LANGUAGE plpgsql;
";

const POST_REACTION_PROJECTION_TRIGGER: &str = r"
DROP TRIGGER IF EXISTS post_reactions_project ON post_reactions;
CREATE TRIGGER post_reactions_project
AFTER INSERT OR DELETE ON post_reactions
FOR EACH ROW EXECUTE FUNCTION project_post_reaction();
";

const COMMENT_REACTION_PROJECTION_FN: &str = r"
CREATE OR REPLACE FUNCTION project_comment_reaction() RETURNS trigger AS $$
BEGIN
    IF TG_OP = 'INSERT' THEN
        UPDATE comments SET
            likes = likes + CASE WHEN NEW.vote THEN 1 ELSE 0 END,
            dislikes = dislikes + CASE WHEN NEW.vote THEN 0 ELSE 1 END
        WHERE comments.id = NEW.comment_id;
        RETURN NEW;
    ELSE
        UPDATE comments SET
            likes = likes - CASE WHEN OLD.vote THEN 1 ELSE 0 END,
            dislikes = dislikes - CASE WHEN OLD.vote THEN 0 ELSE 1 END
        WHERE comments.id = OLD.comment_id;
        RETURN OLD;
    END IF;
END;
$$ LANGUAGE plpgsql;
";

const COMMENT_REACTION_PROJECTION_TRIGGER: &str = r"
DROP TRIGGER IF EXISTS comment_reactions_project ON comment_reactions;
CREATE TRIGGER comment_reactions_project
AFTER INSERT OR DELETE ON comment_reactions
FOR EACH ROW EXECUTE FUNCTION project_comment_reaction();
";

/// Popularity rescoring runs BEFORE the row lands, so the tally update from
/// the reaction projection and the view-count bump both republish the score
/// in the same write.
fn rescore_post_fn(weights: &PopularityConfig) -> String {
    format!(
        r"
CREATE OR REPLACE FUNCTION rescore_post() RETURNS trigger AS $$
BEGIN
    NEW.popularity := NEW.likes * {like_weight} - NEW.dislikes * {dislike_weight} + NEW.views;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;
",
        like_weight = weights.like_weight,
        dislike_weight = weights.dislike_weight,
    )
}

const RESCORE_POST_TRIGGER: &str = r"
DROP TRIGGER IF EXISTS posts_rescore ON posts;
CREATE TRIGGER posts_rescore
BEFORE INSERT OR UPDATE OF likes, dislikes, views ON posts
FOR EACH ROW EXECUTE FUNCTION rescore_post();
";

/// Create tables, provision the sentinel account, and (re)install the
/// projection triggers. Safe to run on every startup.
pub async fn bootstrap(pool: &PgPool, weights: &PopularityConfig) -> Result<(), sqlx::Error> {
    let tables = [
        USER_TABLE,
        SENTINEL_USER,
        TOPIC_TABLE,
        TOPIC_DOCUMENT_INDEX,
        POST_TABLE,
        POST_DOCUMENT_INDEX,
        POST_REACTION_TABLE,
        COMMENT_TABLE,
        COMMENT_REACTION_TABLE,
    ];

    for statement in tables {
        sqlx::raw_sql(statement).execute(pool).await?;
    }
    debug!("tables and sentinel account ready");

    let rescore_fn = rescore_post_fn(weights);
    let triggers = [
        POST_REACTION_PROJECTION_FN,
        POST_REACTION_PROJECTION_TRIGGER,
        COMMENT_REACTION_PROJECTION_FN,
        COMMENT_REACTION_PROJECTION_TRIGGER,
        rescore_fn.as_str(),
        RESCORE_POST_TRIGGER,
    ];

    for statement in triggers {
        sqlx::raw_sql(statement).execute(pool).await?;
    }

    info!(
        like_weight = weights.like_weight,
        dislike_weight = weights.dislike_weight,
        "database schema ready"
    );

    Ok(())
}
