//! Tests for the N+1 heuristics.

use std::path::Path;

use pgscout_analysis::analyzers::nplusone::{ControllerNPlusOne, ViewAssociationAccess};
use pgscout_analysis::analyzers::SourceAnalyzer;
use pgscout_core::config::AnalysisConfig;
use pgscout_core::{FindingKind, FindingLocation, Severity};

fn controller_path() -> &'static Path {
    Path::new("app/controllers/posts_controller.rb")
}

#[test]
fn test_fetch_with_later_association_access_is_flagged() {
    let content = r#"class PostsController < ApplicationController
  def show
    @post = Post.find(params[:id])
    render json: @post.user.name
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert_eq!(findings.len(), 1);

    let finding = &findings[0];
    assert_eq!(finding.kind, FindingKind::PotentialNPlusOne);
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(
        finding.location,
        FindingLocation::Source {
            file: controller_path().to_path_buf(),
            line: 3,
        }
    );
    assert!(finding.message.contains("line 3"));
}

#[test]
fn test_eager_loading_on_the_fetch_line_defuses() {
    let content = r#"class PostsController < ApplicationController
  def show
    @post = Post.includes(:user).find(params[:id])
    render json: @post.user.name
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert!(findings.is_empty());
}

#[test]
fn test_eager_loading_in_the_window_defuses() {
    let content = r#"class PostsController < ApplicationController
  def show
    @post = Post.find(params[:id])
    @post = @post.includes(:user)
    render json: @post.user.name
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert!(findings.is_empty());
}

#[test]
fn test_fetch_without_association_access_is_not_flagged() {
    let content = r#"class PostsController < ApplicationController
  def index
    @posts = Post.all
    render json: @posts
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert!(findings.is_empty());
}

#[test]
fn test_fetch_not_assigned_to_instance_variable_is_not_flagged() {
    let content = r#"class PostsController < ApplicationController
  def show
    post = Post.find(params[:id])
    render json: post.user.name
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert!(findings.is_empty());
}

#[test]
fn test_access_beyond_usage_window_is_not_flagged() {
    let mut content = String::from("@post = Post.find(params[:id])\n");
    for _ in 0..25 {
        content.push_str("# filler\n");
    }
    content.push_str("render json: @post.user.name\n");

    let findings = ControllerNPlusOne::new().analyze(controller_path(), &content);
    assert!(findings.is_empty());
}

#[test]
fn test_usage_window_is_tunable() {
    let mut content = String::from("@post = Post.find(params[:id])\n");
    for _ in 0..25 {
        content.push_str("# filler\n");
    }
    content.push_str("render json: @post.user.name\n");

    let config = AnalysisConfig {
        nplusone_usage_window: Some(30),
        ..Default::default()
    };
    let findings =
        ControllerNPlusOne::from_config(&config).analyze(controller_path(), &content);
    assert_eq!(findings.len(), 1);
}

#[test]
fn test_access_on_a_different_variable_is_not_flagged() {
    let content = r#"class PostsController < ApplicationController
  def show
    @post = Post.find(params[:id])
    render json: @other.user.name
  end
end
"#;
    let findings = ControllerNPlusOne::new().analyze(controller_path(), content);
    assert!(findings.is_empty());
}

#[test]
fn test_view_association_chain_is_flagged_per_line() {
    let content = r#"<h1>Posts</h1>
<% @posts.each do |post| %>
  <p><%= post.user.name %></p>
<% end %>
"#;
    let findings =
        ViewAssociationAccess.analyze(Path::new("app/views/posts/index.html.erb"), content);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::ViewAssociationAccess);
    assert_eq!(findings[0].severity, Severity::Info);
    match &findings[0].location {
        FindingLocation::Source { line, .. } => assert_eq!(*line, 3),
        other => panic!("unexpected location: {other:?}"),
    }
}

#[test]
fn test_plain_view_lines_are_not_flagged() {
    let findings = ViewAssociationAccess.analyze(
        Path::new("app/views/posts/index.html.erb"),
        "<h1>Posts</h1>\n<p>hello</p>\n",
    );
    assert!(findings.is_empty());
}
