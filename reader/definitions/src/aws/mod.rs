//! AWS descriptor list.
//!
//! One descriptor per SDK accessor of the AWS `Reader`, grouped by service.
//! The list order is the declaration order of the generated interface.

use reader_define::Descriptor;

/// Creates the AWS descriptor list.
///
/// ## Services
///
/// - EC2, Auto Scaling, ELB and ELBv2
/// - S3, CloudFront, Route 53
/// - IAM, KMS
/// - RDS, DynamoDB, ElastiCache, EFS
/// - Lambda, SQS, CloudWatch
///
/// ## Examples
///
/// ```rust
/// use reader_definitions::aws::define_aws_reader;
///
/// let descriptors = define_aws_reader();
/// let instances = descriptors.iter().find(|d| d.entity == "Instances").unwrap();
/// assert_eq!(instances.service_namespace, "ec2");
/// assert_eq!(instances.attribute_path.as_deref(), Some("Reservations#Instances"));
/// ```
pub fn define_aws_reader() -> Vec<Descriptor> {
    let mut descriptors = Vec::new();
    descriptors.extend(ec2());
    descriptors.extend(load_balancing());
    descriptors.extend(storage_and_delivery());
    descriptors.extend(identity());
    descriptors.extend(databases());
    descriptors.extend(application());
    descriptors
}

fn ec2() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Instances")
            .with_service("ec2", "Describe")
            .with_attribute_path("Reservations#Instances")
            .with_documentation("GetInstances returns all EC2 instances based on the input given"),
        Descriptor::new("Vpcs")
            .with_service("ec2", "Describe")
            .with_documentation("GetVpcs returns all EC2 VPCs based on the input given"),
        Descriptor::new("VpcPeeringConnections")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetVpcPeeringConnections returns all EC2 VPC Peering Connections based on the input given",
            ),
        Descriptor::new("Subnets")
            .with_service("ec2", "Describe")
            .without_pagination()
            .with_documentation("GetSubnets returns all EC2 subnets based on the input given"),
        Descriptor::new("SecurityGroups")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetSecurityGroups returns all EC2 security groups based on the input given",
            ),
        Descriptor::new("Images")
            .with_service("ec2", "Describe")
            .with_owner_filter("Owners")
            .without_pagination()
            .with_documentation(
                "GetOwnImages returns all EC2 AMI belonging to the Account ID based on the input given",
            ),
        Descriptor::new("Snapshots")
            .with_service("ec2", "Describe")
            .with_owner_filter("OwnerIds")
            .with_documentation(
                "GetOwnSnapshots returns all snapshots belonging to the Account ID based on the input given",
            ),
        Descriptor::new("Volumes")
            .with_service("ec2", "Describe")
            .with_documentation("GetVolumes returns all EC2 volumes based on the input given"),
        Descriptor::new("LaunchTemplates")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetLaunchTemplates returns all LaunchTemplates belonging to the Account ID based on the input given",
            ),
        Descriptor::new("KeyPairs")
            .with_service("ec2", "Describe")
            .with_singular("KeyPairInfo")
            .without_pagination()
            .with_documentation("GetKeyPairs returns all KeyPairs based on the input given"),
        Descriptor::new("InternetGateways")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetInternetGateways returns all EC2 Internet Gateways based on the input given",
            ),
        Descriptor::new("NatGateways")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetNatGateways returns all EC2 NAT Gateways based on the input given",
            ),
        Descriptor::new("RouteTables")
            .with_service("ec2", "Describe")
            .with_documentation(
                "GetRouteTables returns all EC2 Route Tables based on the input given",
            ),
        Descriptor::new("Addresses")
            .with_service("ec2", "Describe")
            .without_pagination()
            .with_documentation(
                "GetAddresses returns all EC2 Elastic IP addresses based on the input given",
            ),
    ]
}

fn load_balancing() -> Vec<Descriptor> {
    vec![
        Descriptor::new("AutoScalingGroups")
            .with_service("autoscaling", "Describe")
            .with_output_type("autoscaling.Group")
            .with_documentation(
                "GetAutoScalingGroups returns all AutoScalingGroups based on the input given",
            ),
        Descriptor::new("LaunchConfigurations")
            .with_service("autoscaling", "Describe")
            .with_documentation(
                "GetLaunchConfigurations returns all LaunchConfigurations based on the input given",
            ),
        Descriptor::new("LoadBalancers")
            .with_service("elb", "Describe")
            .with_output_type("elb.LoadBalancerDescription")
            .with_attribute_path("LoadBalancerDescriptions")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetLoadBalancers returns a list of ELB (v1) based on the input from the different regions",
            ),
        Descriptor::new("LoadBalancersV2")
            .with_service("elbv2", "Describe")
            .with_service_call_name("LoadBalancers")
            .with_output_type("elbv2.LoadBalancer")
            .with_attribute_path("LoadBalancers")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetLoadBalancersV2 returns a list of ELB (v2) - also known as ALB - based on the input from the different regions",
            ),
        Descriptor::new("LoadBalancersV2Listeners")
            .with_service("elbv2", "Describe")
            .with_service_call_name("Listeners")
            .with_output_type("elbv2.Listener")
            .with_attribute_path("Listeners")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetLoadBalancersV2Listeners returns a list of Listeners based on the input from the different regions",
            ),
        Descriptor::new("LoadBalancersV2TargetGroups")
            .with_service("elbv2", "Describe")
            .with_service_call_name("TargetGroups")
            .with_output_type("elbv2.TargetGroup")
            .with_attribute_path("TargetGroups")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetLoadBalancersV2TargetGroups returns a list of TargetGroups based on the input from the different regions",
            ),
    ]
}

fn storage_and_delivery() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Buckets")
            .with_service("s3", "List")
            .with_output_type("s3.Bucket")
            .without_pagination()
            .with_documentation(
                "GetBuckets returns all S3 buckets based on the input given and specifically\nfiltered by Location as the ListBuckets does not do it by itself",
            ),
        Descriptor::new("BucketTags")
            .with_service("s3", "Get")
            .with_signature(
                "GetBucketTags(ctx context.Context, input *s3.GetBucketTaggingInput) ([]*s3.Tag, error)",
            )
            .without_body()
            .with_documentation("GetBucketTags returns the tags of the bucket named in the input"),
        Descriptor::new("CloudFrontDistributions")
            .with_service("cloudfront", "List")
            .with_service_call_name("Distributions")
            .with_output_type("cloudfront.DistributionSummary")
            .with_attribute_path("DistributionList.Items")
            .with_pagination_field("DistributionList.NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetCloudFrontDistributions returns all the CloudFront Distributions on the given input",
            ),
        Descriptor::new("CloudFrontOriginAccessIdentities")
            .with_service("cloudfront", "List")
            .with_service_call_name("CloudFrontOriginAccessIdentities")
            .with_output_type("cloudfront.OriginAccessIdentitySummary")
            .with_attribute_path("CloudFrontOriginAccessIdentityList.Items")
            .with_pagination_field("CloudFrontOriginAccessIdentityList.NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetCloudFrontOriginAccessIdentities returns all the CloudFront Origin Access Identities on the given input",
            ),
        Descriptor::new("HostedZones")
            .with_service("route53", "List")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetHostedZones returns all the HostedZones based on the input given",
            ),
        Descriptor::new("ResourceRecordSets")
            .with_service("route53", "List")
            .with_pagination_field("NextRecordName")
            .with_input_pagination_field("StartRecordName")
            .with_documentation(
                "GetResourceRecordSets returns the ResourceRecordSets of a HostedZone based on the input given",
            ),
        Descriptor::new("EFSFileSystems")
            .with_service("efs", "Describe")
            .with_service_call_name("FileSystems")
            .with_output_type("efs.FileSystemDescription")
            .with_attribute_path("FileSystems")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetEFSFileSystems returns the EFS File Systems on the given input",
            ),
    ]
}

fn identity() -> Vec<Descriptor> {
    vec![
        Descriptor::new("Users")
            .with_service("iam", "List")
            .with_pagination_field("Marker")
            .with_documentation("GetUsers returns all the IAM Users on the given input"),
        Descriptor::new("Groups")
            .with_service("iam", "List")
            .with_pagination_field("Marker")
            .with_documentation("GetGroups returns all the IAM Groups on the given input"),
        Descriptor::new("Roles")
            .with_service("iam", "List")
            .with_pagination_field("Marker")
            .with_documentation("GetRoles returns all the IAM Roles on the given input"),
        Descriptor::new("Policies")
            .with_service("iam", "List")
            .with_pagination_field("Marker")
            .with_documentation("GetPolicies returns all the IAM Policies on the given input"),
        Descriptor::new("InstanceProfiles")
            .with_service("iam", "List")
            .with_pagination_field("Marker")
            .with_documentation(
                "GetInstanceProfiles returns all the IAM InstanceProfiles on the given input",
            ),
        Descriptor::new("AccessKeys")
            .with_service("iam", "List")
            .with_output_type("iam.AccessKeyMetadata")
            .with_attribute_path("AccessKeyMetadata")
            .with_pagination_field("Marker")
            .with_documentation("GetAccessKeys returns all the IAM AccessKeys on the given input"),
        Descriptor::new("AccountPasswordPolicy")
            .with_service("iam", "Get")
            .with_output_type("iam.PasswordPolicy")
            .with_attribute_path("PasswordPolicy")
            .single_result()
            .without_pagination()
            .with_documentation(
                "GetAccountPasswordPolicy returns the IAM AccountPasswordPolicy on the given input",
            ),
        Descriptor::new("KMSKeys")
            .with_service("kms", "List")
            .with_service_call_name("Keys")
            .with_output_type("kms.KeyListEntry")
            .with_attribute_path("Keys")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation("GetKMSKeys returns all the KMS Keys on the given input"),
        Descriptor::new("KMSAliases")
            .with_service("kms", "List")
            .with_service_call_name("Aliases")
            .with_output_type("kms.AliasListEntry")
            .with_attribute_path("Aliases")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation("GetKMSAliases returns all the KMS Aliases on the given input"),
    ]
}

fn databases() -> Vec<Descriptor> {
    vec![
        Descriptor::new("DBInstances")
            .with_service("rds", "Describe")
            .with_pagination_field("Marker")
            .with_documentation("GetDBInstances returns all DB instances based on the input given"),
        Descriptor::new("DBClusters")
            .with_service("rds", "Describe")
            .with_pagination_field("Marker")
            .with_documentation("GetDBClusters returns all DB clusters based on the input given"),
        Descriptor::new("DBParameterGroups")
            .with_service("rds", "Describe")
            .with_pagination_field("Marker")
            .with_documentation(
                "GetDBParameterGroups returns all DB parameterGroups based on the input given",
            ),
        Descriptor::new("DBSubnetGroups")
            .with_service("rds", "Describe")
            .with_pagination_field("Marker")
            .with_documentation(
                "GetDBSubnetGroups returns all DB DBSubnetGroups based on the input given",
            ),
        Descriptor::new("DynamodbGlobalTables")
            .with_service("dynamodb", "List")
            .with_service_call_name("GlobalTables")
            .with_output_type("dynamodb.GlobalTable")
            .with_attribute_path("GlobalTables")
            .with_pagination_field("LastEvaluatedGlobalTableName")
            .with_input_pagination_field("ExclusiveStartGlobalTableName")
            .with_documentation(
                "GetDynamodbGlobalTables returns all DynamoDB Global Tables based on the input given",
            ),
        Descriptor::new("DynamodbTables")
            .with_service("dynamodb", "List")
            .with_service_call_name("Tables")
            .with_output_type("string")
            .with_attribute_path("TableNames")
            .with_pagination_field("LastEvaluatedTableName")
            .with_input_pagination_field("ExclusiveStartTableName")
            .with_documentation(
                "GetDynamodbTables returns all DynamoDB Tables based on the input given",
            ),
        Descriptor::new("ElastiCacheClusters")
            .with_service("elasticache", "Describe")
            .with_service_call_name("CacheClusters")
            .with_output_type("elasticache.CacheCluster")
            .with_attribute_path("CacheClusters")
            .with_pagination_field("Marker")
            .with_documentation(
                "GetElastiCacheClusters returns all Elasticache Clusters based on the input given",
            ),
        Descriptor::new("ElastiCacheReplicationGroups")
            .with_service("elasticache", "Describe")
            .with_service_call_name("ReplicationGroups")
            .with_output_type("elasticache.ReplicationGroup")
            .with_attribute_path("ReplicationGroups")
            .with_pagination_field("Marker")
            .with_documentation(
                "GetElastiCacheReplicationGroups returns the Elasticache Replication Groups on the given input",
            ),
    ]
}

fn application() -> Vec<Descriptor> {
    vec![
        Descriptor::new("LambdaFunctions")
            .with_service("lambda", "List")
            .with_service_call_name("Functions")
            .with_output_type("lambda.FunctionConfiguration")
            .with_attribute_path("Functions")
            .with_pagination_field("NextMarker")
            .with_input_pagination_field("Marker")
            .with_documentation(
                "GetLambdaFunctions returns the lambda functions on the given input",
            ),
        Descriptor::new("SQSQueues")
            .with_service("sqs", "List")
            .with_service_call_name("Queues")
            .with_output_type("string")
            .with_attribute_path("QueueUrls")
            .without_pagination()
            .with_documentation("GetSQSQueues returns the sqs queues on the given input"),
        Descriptor::new("SQSQueueAttributes")
            .with_service("sqs", "Get")
            .with_service_call_name("QueueAttributes")
            .with_output_type("string")
            .with_attribute_path("Attributes")
            .map_result()
            .without_pagination()
            .with_documentation(
                "GetSQSQueueAttributes returns the sqs queue attributes on the given input",
            ),
        Descriptor::new("CloudwatchMetricAlarms")
            .with_service("cloudwatch", "Describe")
            .with_service_call_name("Alarms")
            .with_output_type("cloudwatch.MetricAlarm")
            .with_attribute_path("MetricAlarms")
            .with_documentation(
                "GetCloudwatchMetricAlarms returns the cloudwatch metric alarms on the given input",
            ),
        Descriptor::new("SESDomainIdentities")
            .with_service("ses", "List")
            .with_service_call_name("Identities")
            .with_output_type("string")
            .with_attribute_path("Identities")
            .with_documentation(
                "GetSESDomainIdentities returns the SES domain identities on the given input",
            ),
    ]
}
